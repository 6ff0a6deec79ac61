// Dweve BMDash - Benchmark Result Dashboard
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Shell completion generation

use crate::error::CliError;
use clap::Command;
use clap_complete::{generate, Generator};
use std::io;

/// Write the completion script for `cmd` to stdout.
pub fn generate_completion_for_command<G: Generator>(
    generator: G,
    cmd: &mut Command,
) -> Result<(), CliError> {
    let name = cmd.get_name().to_string();
    generate(generator, cmd, name, &mut io::stdout());
    Ok(())
}

/// Installation instructions for a shell's completion script.
///
/// # Examples
///
/// ```
/// use bmdash_cli::commands::print_installation_instructions;
///
/// let instructions = print_installation_instructions("bash");
/// assert!(instructions.contains("bmdash completion bash"));
/// ```
pub fn print_installation_instructions(shell: &str) -> String {
    match shell.to_lowercase().as_str() {
        "bash" => "# Add to ~/.bashrc:\n\
                   eval \"$(bmdash completion bash)\"\n"
            .to_string(),
        "zsh" => "# Add to ~/.zshrc:\n\
                  eval \"$(bmdash completion zsh)\"\n"
            .to_string(),
        "fish" => "# Save to the fish completions directory:\n\
                   bmdash completion fish > ~/.config/fish/completions/bmdash.fish\n"
            .to_string(),
        "powershell" | "pwsh" => "# Add to your PowerShell profile:\n\
                                  bmdash completion powershell | Out-String | Invoke-Expression\n"
            .to_string(),
        "elvish" => "# Add to ~/.config/elvish/rc.elv:\n\
                     eval (bmdash completion elvish | slurp)\n"
            .to_string(),
        other => format!(
            "Unsupported shell: '{}'. Supported shells: bash, zsh, fish, powershell, elvish\n",
            other
        ),
    }
}
