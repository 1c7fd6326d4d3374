//! Domain types for Melody

mod comment;
mod genre;
mod ids;
mod playlist;
mod track;
mod user;

pub use comment::Comment;
pub use genre::{GenreFilter, APP_GENRES};
pub use ids::{CommentId, PlaylistId, TrackId, UserId};
pub use playlist::Playlist;
pub use track::Track;
pub use user::User;
