//! Record types matching the backend REST wire format.
//!
//! All wire names are camelCase (the backend's JSON convention); optional
//! fields deserialize leniently and are omitted from payloads when unset.

pub mod account;
pub mod author;
pub mod event;
pub mod game;

pub use account::{
    AuthResponse, ChangePasswordData, ContactMessage, Invitation, InvitationVerification,
    LoginCredentials, RegisterData, ResetPasswordConfirm, ResetPasswordRequest,
    UpdateProfileData, User, UserRole,
};
pub use author::{Author, AuthorUpdate};
pub use event::Event;
pub use game::{Category, Game, GameInput, GameStatus, Mechanic};
