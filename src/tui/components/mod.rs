//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as props:
//! - `Header`: title, subtitle, progress indicator and bar
//! - `QuestionCard`: the current question, option feedback and explanation
//! - `StatusBar`: key hints for the current screen
//!
//! ### Stateful Components
//!
//! - `Summary`: end-of-quiz screen; borrows `ReviewState` for its scroll offset
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as props (struct fields), never by
//! reaching into global state. Every frame they are rebuilt from the current
//! `Session` snapshot, so there is nothing to keep in sync.
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── header.rs         (title + progress)
//! ├── question_card.rs  (answering screen)
//! ├── summary.rs        (completed screen + review list)
//! └── status_bar.rs     (key hints)
//! ```

mod header;
pub mod question_card;
mod status_bar;
pub mod summary;

pub use header::Header;
pub use question_card::QuestionCard;
pub use status_bar::StatusBar;
pub use summary::{ReviewState, Summary};
