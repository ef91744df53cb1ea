//! Renders a storefront location as JSON.

use chrono::{DateTime, Utc};
use futures::try_join;
use serde_json::{json, Value};
use tracing::{debug, warn};

use teatro_core::auth::{guard_route, RouteAccess, ROLE_ADMIN};
use teatro_core::derive::{all_movies, featured, price_groups, trailer_showcase};
use teatro_core::filter::{
    movie_href, price_href, FilterController, MemoryLocation, SearchController,
};
use teatro_core::format::{format_duration, format_eur, plural_pecas};
use teatro_core::loader::Notice;
use teatro_core::rental::rentals;

use crate::routes::{split_href, Route};
use crate::state::AppState;

pub async fn render(state: &AppState, href: &str, now: DateTime<Utc>) -> Value {
    let (path, _) = split_href(href);
    let route = Route::parse(path);
    debug!("Rendering {} as {:?}", href, route);

    match route {
        Route::Catalog => render_catalog(state, href),
        Route::Movie(id) => render_movie(state, &id),
        Route::Search => render_search(state, href),
        Route::Prices => render_prices(state),
        Route::Trailers => render_trailers(state),
        Route::Dashboard => render_dashboard(state, path, now).await,
        Route::AdminDashboard => render_admin(state, path),
        Route::NotFound => json!({ "route": "not_found", "path": path }),
    }
}

fn render_catalog(state: &AppState, href: &str) -> Value {
    let snapshot = state.store().snapshot();
    let controller = FilterController::mount(MemoryLocation::new(href), &snapshot);
    let view = state
        .views()
        .get(&snapshot, controller.state(), state.config().rows.row_limit);

    json!({
        "route": "catalog",
        "href": controller.location().href(),
        "filter": controller.state(),
        "view": &*view,
    })
}

fn render_movie(state: &AppState, id: &str) -> Value {
    let snapshot = state.store().snapshot();
    let Some(movie) = snapshot.get_movie_by_id(id) else {
        return json!({ "route": "movie", "found": false, "id": id });
    };

    json!({
        "route": "movie",
        "found": true,
        "movie": movie,
        "categories": snapshot.category_names_for_movie(id),
        "duration": format_duration(movie.duration_min),
        "price": format_eur(movie.price),
        "audience": movie.age_rating.audience(),
    })
}

fn render_search(state: &AppState, href: &str) -> Value {
    let snapshot = state.store().snapshot();
    let controller = SearchController::mount(MemoryLocation::new(href));
    let outcome = controller.results(&snapshot);

    json!({
        "route": "search",
        "query": controller.query(),
        "idle": outcome.is_idle(),
        "results": outcome.matches(),
    })
}

fn render_prices(state: &AppState) -> Value {
    let snapshot = state.store().snapshot();
    let groups: Vec<Value> = price_groups(&all_movies(&snapshot))
        .into_iter()
        .map(|g| {
            json!({
                "price": g.price,
                "count": g.count,
                "label": format_eur(g.price),
                "count_label": plural_pecas(g.count),
                "href": price_href(g.price),
            })
        })
        .collect();

    json!({
        "route": "prices",
        "total": plural_pecas(snapshot.total_movies()),
        "groups": groups,
    })
}

fn render_trailers(state: &AppState) -> Value {
    let snapshot = state.store().snapshot();
    let trailers: Vec<Value> = trailer_showcase(&all_movies(&snapshot))
        .into_iter()
        .map(|m| {
            json!({
                "movie_id": m.id,
                "title": m.title,
                "trailer_url": m.trailer(),
                "price": format_eur(m.price),
                "href": movie_href(&m.id),
            })
        })
        .collect();

    json!({
        "route": "trailers",
        "trailers": trailers,
    })
}

async fn render_dashboard(state: &AppState, path: &str, now: DateTime<Utc>) -> Value {
    let identity = state.identity();
    let access = guard_route(identity.as_ref(), path, &[]);
    let Some(identity) = identity.filter(|_| access.is_granted()) else {
        return denied("dashboard", &access);
    };

    let window_hours = state.config().rental.window_hours;
    let (active, purchases, notice) = match state.api() {
        Some(api) => match try_join!(api.my_active_purchases(), api.my_purchases()) {
            Ok((active, all)) => (
                rentals(&active, now, window_hours),
                rentals(&all, now, window_hours),
                None,
            ),
            Err(e) => {
                warn!("Failed to load purchases: {}", e);
                (
                    Vec::new(),
                    Vec::new(),
                    Some(Notice {
                        message: e.user_message(),
                        retryable: true,
                    }),
                )
            }
        },
        None => (Vec::new(), Vec::new(), None),
    };

    json!({
        "route": "dashboard",
        "user_id": identity.user_id,
        "is_admin": identity.is_admin(),
        "active": active,
        "active_label": plural_pecas(active.len()),
        "purchases": purchases,
        "notice": notice,
    })
}

fn render_admin(state: &AppState, path: &str) -> Value {
    let identity = state.identity();
    let access = guard_route(identity.as_ref(), path, &[ROLE_ADMIN]);
    if !access.is_granted() {
        return denied("admin", &access);
    }

    let snapshot = state.store().snapshot();
    let categories: Vec<Value> = snapshot
        .categories()
        .iter()
        .map(|c| json!({ "id": c.id, "name": c.name, "movie_count": c.movies.len() }))
        .collect();
    let highlighted: Vec<&str> = featured(&all_movies(&snapshot))
        .iter()
        .map(|m| m.id.as_str())
        .collect();

    json!({
        "route": "admin",
        "version": snapshot.version(),
        "total_movies": snapshot.total_movies(),
        "categories": categories,
        "featured": highlighted,
    })
}

fn denied(route: &str, access: &RouteAccess) -> Value {
    json!({
        "route": route,
        "access": access,
        "redirect": access.redirect_path(),
    })
}
