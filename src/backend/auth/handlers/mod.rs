//! Authentication Handlers Module
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── signup.rs   - User registration handler
//! ├── login.rs    - Token issuing handler
//! ├── verify.rs   - Token verification handler
//! └── me.rs       - Get current user handler
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /api/v1/auth/signup/ - User registration
//! - **`login`** - POST /api/v1/jwt/create/ - Exchange credentials for a token
//! - **`verify`** - POST /api/v1/jwt/verify/ - Check a token
//! - **`get_me`** - GET /api/v1/auth/me/ - Current user info

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

/// Token verification handler
pub mod verify;

/// Get current user handler
pub mod me;

// Re-export commonly used types
pub use types::{AuthResponse, LoginRequest, SignupRequest, UserResponse, VerifyRequest};

// Re-export handlers
pub use signup::signup;
pub use login::login;
pub use verify::verify;
pub use me::get_me;
