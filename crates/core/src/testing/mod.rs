//! Testing utilities and mock implementations.
//!
//! # Example
//!
//! ```rust,ignore
//! use teatro_core::testing::{fixtures, MockStorefrontApi};
//!
//! let api = MockStorefrontApi::with_demo_data();
//! api.set_delay(Some(Duration::from_millis(50))).await;
//!
//! let loader = CatalogLoader::new(CatalogStore::empty(), Arc::new(api));
//! ```

mod mock_api;

pub use mock_api::{MockStorefrontApi, RecordedApiCall};

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::api::{
        AdminConfigResponse, CollaboratorResponse, StreamingVideoResponse, VideoCategoryResponse,
    };
    use crate::catalog::{AgeRating, Category, Collaborator, Movie};

    /// A movie with empty metadata: no date, no flag, rating and price zero.
    pub fn movie(id: &str, title: &str) -> Movie {
        Movie {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            year: 0,
            duration_min: 0,
            rating: 0.0,
            poster_url: String::new(),
            trailer_url: None,
            age_rating: AgeRating::L,
            price: 0.0,
            created_at: String::new(),
            is_featured: None,
            is_trailer_featured: None,
            collaborators: Vec::new(),
        }
    }

    pub fn category(id: &str, name: &str, movies: Vec<Movie>) -> Category {
        Category {
            id: id.to_string(),
            name: name.to_string(),
            movies,
        }
    }

    /// Director, actor, set designer and cinematographer of one title.
    pub fn crew(seed: u32) -> Vec<Collaborator> {
        [
            ("Inês Ribeiro", "Direção"),
            ("Tomás Almeida", "Interpretação"),
            ("Marta Correia", "Cenografia"),
            ("Bruno Santos", "Direção de fotografia"),
        ]
        .iter()
        .enumerate()
        .map(|(i, (name, role))| Collaborator {
            id: format!("c-{}-{:02}", seed, i + 1),
            name: name.to_string(),
            role: role.to_string(),
            photo_url: None,
            profile_url: Some("https://instagram.com/teatrolisboa".to_string()),
        })
        .collect()
    }

    struct DemoTitle {
        id: u32,
        title: &'static str,
        year: i32,
        duration_min: u32,
        rating: f64,
        description: &'static str,
        age_rating: AgeRating,
        created_at: &'static str,
    }

    const DEMO_TITLES: [DemoTitle; 5] = [
        DemoTitle {
            id: 16,
            title: "A vida é sonho",
            year: 2023,
            duration_min: 124,
            rating: 8.2,
            description: "A director returns home to rebuild what broke.",
            age_rating: AgeRating::M16,
            created_at: "2026-01-30T11:20:00.000Z",
        },
        DemoTitle {
            id: 17,
            title: "Afogada na tua vergonha",
            year: 2021,
            duration_min: 107,
            rating: 7.7,
            description: "Two siblings redefine family after a loss.",
            age_rating: AgeRating::M12,
            created_at: "2026-01-11T10:00:00.000Z",
        },
        DemoTitle {
            id: 18,
            title: "Galgar com tudo por cima de tudo",
            year: 2022,
            duration_min: 113,
            rating: 7.9,
            description: "A playwright confronts the story behind the story.",
            age_rating: AgeRating::M16,
            created_at: "2026-01-20T10:00:00.000Z",
        },
        DemoTitle {
            id: 19,
            title: "o crime de aldeia velha",
            year: 2020,
            duration_min: 96,
            rating: 7.4,
            description: "A friendship tested by fame and distance.",
            age_rating: AgeRating::M16,
            created_at: "2026-01-04T10:00:00.000Z",
        },
        DemoTitle {
            id: 20,
            title: "Ode maritima",
            year: 2024,
            duration_min: 118,
            rating: 8.1,
            description: "A new beginning hidden inside an old routine.",
            age_rating: AgeRating::M12,
            created_at: "2026-02-08T09:30:00.000Z",
        },
    ];

    fn demo_trailer_url(id: u32) -> String {
        format!("https://videos.example/{}-trailer.mp4", id)
    }

    /// The house catalog: five featured dramas at 9 € and an empty
    /// "coming soon" category.
    pub fn demo_catalog() -> Vec<Category> {
        let dramas = DEMO_TITLES
            .iter()
            .map(|t| Movie {
                id: format!("m-{:03}", t.id),
                title: t.title.to_string(),
                description: t.description.to_string(),
                year: t.year,
                duration_min: t.duration_min,
                rating: t.rating,
                poster_url: format!("/posters/m-{:03}.jpg", t.id),
                trailer_url: Some(demo_trailer_url(t.id)),
                age_rating: t.age_rating,
                price: 9.0,
                created_at: t.created_at.to_string(),
                is_featured: Some(true),
                is_trailer_featured: None,
                collaborators: crew(t.id),
            })
            .collect();

        vec![
            category("cat-drama", "Drama", dramas),
            category("cat-soon", "Brevemente disponível", vec![]),
        ]
    }

    pub fn demo_api_categories() -> Vec<VideoCategoryResponse> {
        vec![
            VideoCategoryResponse {
                id: 1,
                name: "Drama".to_string(),
            },
            VideoCategoryResponse {
                id: 2,
                name: "Brevemente disponível".to_string(),
            },
        ]
    }

    pub fn demo_api_videos() -> Vec<StreamingVideoResponse> {
        DEMO_TITLES
            .iter()
            .map(|t| StreamingVideoResponse {
                streaming_video_id: u64::from(t.id),
                name: t.title.to_string(),
                video_url: format!("https://videos.example/{}.mp4", t.id),
                video_trailer_url: Some(demo_trailer_url(t.id)),
                thumb_image: None,
                likes: t.rating * 10.0,
                synopsis: Some(t.description.to_string()),
                age_rating: t.age_rating,
                price: 9.0,
                year: t.year,
                collaborator_ids: vec![1, 2],
                category_ids: vec![1],
                created_at: Some(t.created_at.to_string()),
            })
            .collect()
    }

    pub fn demo_api_collaborators() -> Vec<CollaboratorResponse> {
        vec![
            CollaboratorResponse {
                collaborator_id: 1,
                name: "Inês Ribeiro".to_string(),
                role: "Direção".to_string(),
                social_media: Some("https://instagram.com/teatrolisboa".to_string()),
                profile_image: None,
            },
            CollaboratorResponse {
                collaborator_id: 2,
                name: "Tomás Almeida".to_string(),
                role: "Interpretação".to_string(),
                social_media: None,
                profile_image: None,
            },
        ]
    }

    /// Highlights two of the demo titles.
    pub fn demo_api_admin_config() -> AdminConfigResponse {
        AdminConfigResponse {
            id: 1,
            destaque_video_ids: vec![16, 20],
            destaque_trailer_video_ids: vec![20],
        }
    }
}
