//! Turns API responses into catalog categories.

use std::collections::{HashMap, HashSet};

use super::types::{
    AdminConfigResponse, CollaboratorResponse, StreamingVideoResponse, VideoCategoryResponse,
};
use crate::catalog::{Category, Collaborator, Movie};

/// Build the catalog from the four list endpoints.
///
/// One category per API category, in API order, holding the videos that
/// list it in video order. A video is featured when the admin config
/// highlights it; without an admin config nothing is flagged and the
/// featured row falls back to ratings. Trailer highlights follow the same
/// rule. Unknown collaborator ids are skipped.
pub fn assemble_categories(
    categories: &[VideoCategoryResponse],
    videos: &[StreamingVideoResponse],
    collaborators: &[CollaboratorResponse],
    admin_config: Option<&AdminConfigResponse>,
) -> Vec<Category> {
    let people: HashMap<u64, &CollaboratorResponse> = collaborators
        .iter()
        .map(|c| (c.collaborator_id, c))
        .collect();

    let highlights = admin_config.map(|config| Highlights {
        videos: config.destaque_video_ids.iter().copied().collect(),
        trailers: config.destaque_trailer_video_ids.iter().copied().collect(),
    });

    categories
        .iter()
        .map(|category| Category {
            id: category.id.to_string(),
            name: category.name.clone(),
            movies: videos
                .iter()
                .filter(|v| v.category_ids.contains(&category.id))
                .map(|v| to_movie(v, &people, highlights.as_ref()))
                .collect(),
        })
        .collect()
}

/// Video ids picked in the admin config.
struct Highlights {
    videos: HashSet<u64>,
    trailers: HashSet<u64>,
}

fn to_movie(
    video: &StreamingVideoResponse,
    people: &HashMap<u64, &CollaboratorResponse>,
    highlights: Option<&Highlights>,
) -> Movie {
    Movie {
        id: video.streaming_video_id.to_string(),
        title: video.name.clone(),
        description: video.synopsis.clone().unwrap_or_default(),
        year: video.year,
        duration_min: 0,
        rating: video.likes,
        poster_url: video.thumb_image.clone().unwrap_or_default(),
        trailer_url: video.video_trailer_url.clone(),
        age_rating: video.age_rating,
        price: video.price,
        created_at: video.created_at.clone().unwrap_or_default(),
        is_featured: highlights.map(|h| h.videos.contains(&video.streaming_video_id)),
        is_trailer_featured: highlights.map(|h| h.trailers.contains(&video.streaming_video_id)),
        collaborators: video
            .collaborator_ids
            .iter()
            .filter_map(|id| people.get(id))
            .map(|c| Collaborator {
                id: c.collaborator_id.to_string(),
                name: c.name.clone(),
                role: c.role.clone(),
                photo_url: c.profile_image.clone(),
                profile_url: c.social_media.clone(),
            })
            .collect(),
    }
}
