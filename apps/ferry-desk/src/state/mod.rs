//! # State Module
//!
//! Application state for the ferry desk.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                         AppState                                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │          ┌──────────────────┼──────────────────┐                       │
//! │          ▼                  ▼                  ▼                        │
//! │  ┌──────────────┐  ┌──────────────────┐  ┌──────────────────┐          │
//! │  │ ConfigState  │  │ TravelerRegistry │  │ Session          │          │
//! │  │              │  │                  │  │                  │          │
//! │  │ ticket_dir   │  │ travelers        │  │ departure time   │          │
//! │  │ destinations │  │ next id          │  │ admin logged in  │          │
//! │  │ password     │  │ PNG renderer     │  │                  │          │
//! │  └──────────────┘  └──────────────────┘  └──────────────────┘          │
//! │                                                                         │
//! │  One owner, one thread: commands take `&mut AppState`.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod app;
mod config;

pub use app::AppState;
pub use config::ConfigState;
