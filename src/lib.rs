//! Interactive scaffolding for entity API modules.
//!
//! `entigen` asks a short series of questions (entity name, API method,
//! comma-separated parameters, then one required/optional and one type
//! question per parameter) and derives every field a template needs:
//! name casings, the plural flag, the parameter doc block, and the
//! required/optional spec token lists. The derived context either feeds
//! the built-in renderer or is emitted as JSON for external tooling.
//!
//! Prompting goes through the [`prompt::Prompter`] trait, so the whole
//! collection flow can be driven without a terminal:
//!
//! ```
//! use entigen::collect::collect;
//! use entigen::prompt::ScriptedPrompter;
//!
//! let mut prompter = ScriptedPrompter::new()
//!     .text("mediaCollections") // entity name
//!     .pick(0)                  // GET
//!     .text("active,name")
//!     .flag(true)               // active is required
//!     .flag(false)              // name is optional
//!     .pick(1)                  // active: boolean
//!     .pick(2);                 // name: string
//!
//! let ctx = collect(&mut prompter).unwrap();
//! assert_eq!(ctx.function_name, "MediaCollections");
//! assert_eq!(ctx.req_spec_params, "::specs/active ");
//! assert_eq!(ctx.opt_spec_params, "::specs/name ");
//! ```

pub mod cli;
pub mod collect;
pub mod config;
pub mod context;
pub mod prompt;
pub mod render;
pub mod strings;
pub mod types;
