//! Turing-machine configuration snapshots.
//!
//! A [`TMConfig`] is the triple (state, head, tape) at one instant. The tape
//! is finite; a head equal to `tape.len()` sits on the blank cell just past
//! the written region.

use serde::{Deserialize, Serialize};

use crate::codec::CodecConfig;
use crate::error::{DomainError, Result};

/// A tape symbol. Signed so that negative input can be represented and
/// rejected rather than wrapped.
pub type Symbol = i64;

/// A snapshot of a machine's state, head position and tape contents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TMConfig {
    state: u32,
    head: usize,
    tape: Vec<Symbol>,
}

impl TMConfig {
    /// Build a configuration without checking it.
    ///
    /// The codec validates on [`encode`](crate::Codec::encode), so an invalid
    /// configuration built here is rejected there.
    pub fn new(state: u32, head: usize, tape: Vec<Symbol>) -> Self {
        Self { state, head, tape }
    }

    /// Build a configuration and check it against `config` immediately.
    pub fn validated(
        state: u32,
        head: usize,
        tape: Vec<Symbol>,
        config: &CodecConfig,
    ) -> Result<Self> {
        let tm = Self::new(state, head, tape);
        tm.check(config)?;
        Ok(tm)
    }

    /// Empty tape, head on cell 0.
    pub fn blank(state: u32) -> Self {
        Self::new(state, 0, Vec::new())
    }

    pub fn state(&self) -> u32 {
        self.state
    }

    pub fn head(&self) -> usize {
        self.head
    }

    pub fn tape(&self) -> &[Symbol] {
        &self.tape
    }

    /// True when the head sits on the blank extension past the tape.
    pub fn is_head_past_end(&self) -> bool {
        self.head == self.tape.len()
    }

    /// Copy of this configuration with a different head position.
    pub fn with_head(&self, head: usize) -> Self {
        Self::new(self.state, head, self.tape.clone())
    }

    /// Copy of this configuration with a different state.
    pub fn with_state(&self, state: u32) -> Self {
        Self::new(state, self.head, self.tape.clone())
    }

    /// Check every precondition the encoder relies on.
    pub(crate) fn check(&self, config: &CodecConfig) -> Result<()> {
        if self.head > self.tape.len() {
            return Err(DomainError::HeadOutOfRange {
                head: self.head,
                tape_len: self.tape.len(),
            });
        }
        for (index, &symbol) in self.tape.iter().enumerate() {
            config.check_symbol(index, symbol)?;
        }
        Ok(())
    }
}
