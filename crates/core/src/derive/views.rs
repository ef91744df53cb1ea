use std::cmp::Ordering;
use std::collections::HashSet;

use serde::Serialize;

use crate::catalog::{Movie, Snapshot};

/// How many movies the rating fallback of [`featured`] returns.
pub const FEATURED_FALLBACK_LIMIT: usize = 12;

/// Maximum entries of the trailer showcase.
pub const TRAILER_SHOWCASE_LIMIT: usize = 5;

/// Maximum posters previewed on a category tile.
pub const GRID_PREVIEW_SIZE: usize = 4;

/// Number of movies sharing one exact price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceGroup {
    pub price: f64,
    pub count: usize,
}

/// All movies of all categories, in category order.
pub fn all_movies(snapshot: &Snapshot) -> Vec<&Movie> {
    snapshot
        .categories()
        .iter()
        .flat_map(|c| c.movies.iter())
        .collect()
}

/// Newest first. Unparsable timestamps sort last; equal timestamps keep
/// their input order.
pub fn recently_added<'a>(movies: &[&'a Movie]) -> Vec<&'a Movie> {
    let mut sorted = movies.to_vec();
    sorted.sort_by(|a, b| newest_first(a, b));
    sorted
}

/// Editorial selection.
///
/// Flagged movies win outright, newest first, however few there are. With
/// no flag set anywhere the selection falls back to the
/// [`FEATURED_FALLBACK_LIMIT`] best rated movies, ties broken newest first.
pub fn featured<'a>(movies: &[&'a Movie]) -> Vec<&'a Movie> {
    let flagged: Vec<&Movie> = movies
        .iter()
        .copied()
        .filter(|m| m.is_flagged_featured())
        .collect();

    if !flagged.is_empty() {
        return recently_added(&flagged);
    }

    let mut ranked = movies.to_vec();
    ranked.sort_by(|a, b| {
        rating_key(b.rating)
            .total_cmp(&rating_key(a.rating))
            .then_with(|| newest_first(a, b))
    });
    ranked.truncate(FEATURED_FALLBACK_LIMIT);
    ranked
}

/// Titles offered in the trailer showcase.
///
/// Only movies with a trailer qualify, each id once. Movies picked for the
/// showcase come first in input order; without any pick every movie with a
/// trailer qualifies, newest first.
pub fn trailer_showcase<'a>(movies: &[&'a Movie]) -> Vec<&'a Movie> {
    let mut seen = HashSet::new();
    let with_trailer: Vec<&Movie> = movies
        .iter()
        .copied()
        .filter(|m| m.trailer().is_some())
        .filter(|m| seen.insert(m.id.as_str()))
        .collect();

    let picked: Vec<&Movie> = with_trailer
        .iter()
        .copied()
        .filter(|m| matches!(m.is_trailer_featured, Some(true)))
        .collect();

    let mut showcase = if picked.is_empty() {
        recently_added(&with_trailer)
    } else {
        picked
    };
    showcase.truncate(TRAILER_SHOWCASE_LIMIT);
    showcase
}

/// Partition by exact price, ascending.
///
/// `0.0` and `-0.0` share a bucket, as do NaN prices, so the counts always
/// add up to `movies.len()`.
pub fn price_groups(movies: &[&Movie]) -> Vec<PriceGroup> {
    let mut prices: Vec<f64> = movies.iter().map(|m| price_key(m.price)).collect();
    prices.sort_by(|a, b| a.total_cmp(b));

    let mut groups: Vec<PriceGroup> = Vec::new();
    for price in prices {
        match groups.last_mut() {
            Some(last) if last.price.to_bits() == price.to_bits() => last.count += 1,
            _ => groups.push(PriceGroup { price, count: 1 }),
        }
    }
    groups
}

/// Movies at exactly `price`.
pub fn movies_at_price<'a>(movies: &[&'a Movie], price: f64) -> Vec<&'a Movie> {
    movies
        .iter()
        .copied()
        .filter(|m| m.price == price)
        .collect()
}

/// Movies of one category, optionally narrowed to one exact price.
pub fn category_movies<'a>(
    snapshot: &'a Snapshot,
    category_id: &str,
    price: Option<f64>,
) -> Vec<&'a Movie> {
    let movies = snapshot.get_movies_by_category_id(category_id).iter();
    match price {
        Some(price) => movies.filter(|m| m.price == price).collect(),
        None => movies.collect(),
    }
}

/// Posters previewed on a category tile.
///
/// One movie shows alone, two or three show in list order, and four or
/// more show the last four (the most recently curated).
pub fn grid_clamp<T>(items: &[T]) -> &[T] {
    if items.len() >= GRID_PREVIEW_SIZE {
        &items[items.len() - GRID_PREVIEW_SIZE..]
    } else {
        items
    }
}

fn newest_first(a: &Movie, b: &Movie) -> Ordering {
    // None < Some(_), so reversing puts unparsable timestamps last.
    b.created_at_millis().cmp(&a.created_at_millis())
}

fn rating_key(rating: f64) -> f64 {
    if rating.is_nan() {
        f64::NEG_INFINITY
    } else {
        rating
    }
}

fn price_key(price: f64) -> f64 {
    if price.is_nan() {
        f64::NAN
    } else if price == 0.0 {
        0.0
    } else {
        price
    }
}
