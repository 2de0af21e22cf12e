/*
 * Copyright (c) 2024. Govcraft
 *
 * Licensed under either of
 *   * Apache License, Version 2.0 (the "License");
 *     you may not use this file except in compliance with the License.
 *     You may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0
 *   * MIT license: http://opensource.org/licenses/MIT
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the applicable License for the specific language governing permissions and
 * limitations under that License.
 */

//! Loading `MailboxConfig` from disk.

use std::fs;

use prio_mailbox::prelude::*;
use tempfile::TempDir;

use crate::setup::initialize_tracing;

mod setup;

/// A config file under `$XDG_CONFIG_HOME/prio-mailbox/` is picked up by `load`.
#[test]
fn test_xdg_config_file_is_loaded() -> anyhow::Result<()> {
    initialize_tracing();
    let temp_dir = TempDir::new()?;
    let config_dir = temp_dir.path().join("prio-mailbox");
    fs::create_dir_all(&config_dir)?;
    fs::write(
        config_dir.join("config.toml"),
        r#"
        [limits]
        initial_capacity = 256

        [defaults]
        priority = 7
        mailbox_name = "inbox"

        [timeouts]
        dispatcher_shutdown_timeout_ms = 2500
        "#,
    )?;
    std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());

    let config = MailboxConfig::load();
    assert_eq!(config.limits.initial_capacity, 256);
    assert_eq!(config.defaults.priority, 7);
    assert_eq!(config.defaults.mailbox_name, "inbox");
    assert_eq!(config.dispatcher_shutdown_timeout().as_millis(), 2500);

    temp_dir.close()?;
    Ok(())
}

/// A malformed file falls back to defaults instead of failing.
#[test]
fn test_malformed_file_falls_back_to_defaults() -> anyhow::Result<()> {
    initialize_tracing();
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[limits\ninitial_capacity = ")?;

    let config = MailboxConfig::load_from(&path);
    assert_eq!(config.limits.initial_capacity, 16);
    assert_eq!(config.defaults.priority, 1);
    Ok(())
}

/// A missing file falls back to defaults.
#[test]
fn test_missing_file_falls_back_to_defaults() {
    initialize_tracing();
    let config = MailboxConfig::load_from(std::path::Path::new("/nonexistent/prio-mailbox.toml"));
    assert_eq!(config.defaults.mailbox_name, "mailbox");
}

/// A loaded configuration drives the capacity hint of a queue built from it.
#[test]
fn test_config_values_size_new_queues() -> anyhow::Result<()> {
    initialize_tracing();
    let config = MailboxConfig::from_toml_str("[limits]\ninitial_capacity = 3")?;
    let queue = PriorityQueue::new(config.limits.initial_capacity, None);
    assert!(queue.capacity() >= 3);
    Ok(())
}
