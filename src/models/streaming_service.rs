use serde::Serialize;

/// A streaming platform the user can subscribe to.
///
/// `id` is the TMDB provider id, which is what the watch/providers endpoint
/// reports for each title. If a service's TMDB id ever changes, only this
/// table needs updating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamingService {
    pub id: u32,
    /// Full display name (e.g. "Apple TV+").
    pub name: &'static str,
    /// Short name used on result badges (e.g. "Apple").
    pub short_name: &'static str,
    /// Primary hex brand colour.
    pub brand_color: &'static str,
    /// Foreground colour legible on `brand_color`.
    pub text_color: &'static str,
    /// TMDB logo path (e.g. "/pbpMk2JmcoNnQwx5JGpXngfoWtp.jpg").
    pub logo_path: &'static str,
}

/// The supported streaming services, in onboarding display order.
pub const STREAMING_SERVICES: &[StreamingService] = &[
    StreamingService {
        id: 8,
        name: "Netflix",
        short_name: "Netflix",
        brand_color: "#E50914",
        text_color: "#FFFFFF",
        logo_path: "/pbpMk2JmcoNnQwx5JGpXngfoWtp.jpg",
    },
    StreamingService {
        id: 15,
        name: "Hulu",
        short_name: "Hulu",
        brand_color: "#28B46C",
        text_color: "#FFFFFF",
        logo_path: "/zxrVdFjIjLqkfnwyghnfywTn3Lh.jpg",
    },
    StreamingService {
        id: 337,
        name: "Disney+",
        short_name: "Disney+",
        brand_color: "#17337D",
        text_color: "#FFFFFF",
        logo_path: "/7rwgEs15tFwyR9NPQ5vpzxTj19Q.jpg",
    },
    StreamingService {
        id: 9,
        name: "Prime Video",
        short_name: "Prime",
        brand_color: "#00A8E1",
        text_color: "#FFFFFF",
        logo_path: "/pvske1MyAoymrs5bguRfVqYiM9a.jpg",
    },
    StreamingService {
        // Formerly HBO Max; TMDB still files it under the old name
        id: 1899,
        name: "Max",
        short_name: "Max",
        brand_color: "#002BE7",
        text_color: "#FFFFFF",
        logo_path: "/jbe4gVSfRlbPTdESXhEKpornsfu.jpg",
    },
    StreamingService {
        id: 387,
        name: "Apple TV+",
        short_name: "Apple",
        brand_color: "#2C2C2C",
        text_color: "#FFFFFF",
        logo_path: "/6uhKBfmtzFqOcLousHwZuzcrScK.jpg",
    },
    StreamingService {
        // Essential tier id; covers base subscription content
        id: 2616,
        name: "Paramount+",
        short_name: "Paramount",
        brand_color: "#1A58C5",
        text_color: "#FFFFFF",
        logo_path: "/5wym1C0jAvJeGirPdgVpcW0CCuy.jpg",
    },
    StreamingService {
        id: 386,
        name: "Peacock",
        short_name: "Peacock",
        brand_color: "#000000",
        text_color: "#FFFFFF",
        logo_path: "/2aGrp1xw3qhwCYvNGAJZPdjfeeX.jpg",
    },
];

/// Looks a service up by its TMDB provider id.
pub fn service_by_id(id: u32) -> Option<&'static StreamingService> {
    STREAMING_SERVICES.iter().find(|s| s.id == id)
}
