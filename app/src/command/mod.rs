//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy with its own input type, enabling
//! static dispatch with no boxing: `main` parses the arguments and hands
//! each strategy a typed input.

mod catalog;
mod chat;
mod info;
mod init;
mod recommend;
mod version;

pub use catalog::CatalogStrategy;
pub use chat::{ChatInput, ChatStrategy};
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use recommend::{RecommendInput, RecommendStrategy};
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
///
/// Each strategy defines its own input type via the associated type,
/// enabling type-safe parameter passing without runtime casting.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
