// envprinter: project environment reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem utilities.
//!
//! ```text
//! walk:  find_files()   ignore::WalkParallel + wax glob, sorted output
//!        GlobSearch     depth from the glob, pruned VCS dirs
//! ```

pub mod walk;
