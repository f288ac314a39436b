//! Truss geometry handlers.

use axum::Json;
use trussdash_core::geometry::member_length;

use crate::models::{MemberLengthRequest, MemberLengthResponse};

/// `POST /api/geometry/member-length`: longest distance between any two points.
pub async fn member_length_handler(
    Json(body): Json<MemberLengthRequest>,
) -> Json<MemberLengthResponse> {
    Json(MemberLengthResponse {
        length: member_length(&body.points),
    })
}
