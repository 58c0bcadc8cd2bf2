// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shift_roster_api::ApiError;

/// The load state of a grid page, re-entered on every week/team change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridPhase {
    /// Structure built, no data requested yet.
    #[default]
    Idle,
    /// A load is in flight; the page stays responsive.
    Loading,
    /// The last load completed (possibly with per-fetch failures).
    Loaded,
}

/// A user-facing status line, the textual loading/saving/error surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// The message text.
    pub text: String,
    /// Whether this is an error (renderers color accordingly).
    pub is_error: bool,
}

impl Notice {
    /// Creates an informational notice.
    #[must_use]
    pub fn info(text: &str) -> Self {
        Self {
            text: text.to_string(),
            is_error: false,
        }
    }

    /// Creates an error notice.
    #[must_use]
    pub fn error(text: &str) -> Self {
        Self {
            text: text.to_string(),
            is_error: true,
        }
    }

    /// Creates an error notice from a translated API error.
    #[must_use]
    pub fn from_api_error(err: &ApiError) -> Self {
        Self {
            text: err.to_string(),
            is_error: true,
        }
    }
}
