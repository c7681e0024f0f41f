//! Scaffold Use Case
//!
//! Orchestrates project creation:
//! 1. Check the Node.js version
//! 2. Check the version-control tool (when the template source needs it)
//! 3. Create the project directory
//! 4. Acquire the template into a temporary workspace
//! 5. Copy the template into the project
//! 6. Remove the workspace
//! 7. Rewrite `package.json` / `serverless.yml`
//! 8. Install dependencies
//!
//! Every step is fatal. Whatever fails, the workspace is removed before the
//! error is returned, and removal errors never replace the original error.

mod options;
mod use_case;


pub use options::{ScaffoldOptions, ScaffoldReport};
pub use use_case::Scaffolder;
