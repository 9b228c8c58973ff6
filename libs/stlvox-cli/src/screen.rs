//! Delivery of blocks to a server console attached to GNU screen.
//!
//! Each block becomes one `setblock X Y Z <block>` console line, injected
//! with `screen -S <session> -p <page> -X stuff`. Without `commit` the sink
//! only formats (and optionally logs) the commands.

use std::process::Command;

use config::constants::SETBLOCK_COMMAND;
use glam::IVec3;
use stlvox_raster::{BlockSink, SinkError};
use tracing::{info, warn};

/// Sends `setblock` commands through `screen -X stuff`.
#[derive(Debug, Clone)]
pub struct ScreenConsoleSink {
    screen: String,
    page: String,
    block_type: String,
    commit: bool,
    verbose: bool,
    sent: usize,
}

impl ScreenConsoleSink {
    /// Creates a dry-run sink for `block_type` on the given screen session and page.
    pub fn new(
        screen: impl Into<String>,
        page: impl Into<String>,
        block_type: impl Into<String>,
    ) -> Self {
        Self {
            screen: screen.into(),
            page: page.into(),
            block_type: block_type.into(),
            commit: false,
            verbose: false,
            sent: 0,
        }
    }

    /// Run `screen` for each block instead of only formatting.
    pub fn with_commit(mut self, commit: bool) -> Self {
        self.commit = commit;
        self
    }

    /// Log every formatted command at `info`.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Number of `screen` invocations made so far.
    pub fn sent(&self) -> usize {
        self.sent
    }

    /// Console line for `block`, newline included.
    pub fn command_text(&self, block: IVec3) -> String {
        format!(
            "{SETBLOCK_COMMAND} {} {} {} {}\n",
            block.x, block.y, block.z, self.block_type
        )
    }

    /// Arguments passed to `screen`.
    ///
    /// `stuff` expands escapes itself, so the trailing newline is written as
    /// the two characters `\n`.
    pub fn screen_args(&self, block: IVec3) -> [String; 7] {
        let line = self.command_text(block);
        let stuffed = format!("{}\\n", line.trim_end_matches('\n'));
        [
            "-S".to_string(),
            self.screen.clone(),
            "-p".to_string(),
            self.page.clone(),
            "-X".to_string(),
            "stuff".to_string(),
            stuffed,
        ]
    }
}

impl BlockSink for ScreenConsoleSink {
    fn accept(&mut self, block: IVec3) -> Result<(), SinkError> {
        if self.verbose {
            info!(command = %self.command_text(block).trim_end(), "console command");
        }
        if !self.commit {
            return Ok(());
        }

        let args = self.screen_args(block);
        let status = Command::new("screen").args(&args).status()?;
        self.sent += 1;
        if !status.success() {
            warn!(%status, block = %block, "screen reported failure");
        }
        Ok(())
    }
}
