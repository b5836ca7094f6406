//! Install hints for a component's third-party packages
//!
//! Nothing here runs a package manager; the user copies the command.

/// Package name prefix that must go through `npx expo install`
const EXPO_PREFIX: &str = "expo-";

/// Suggested command for installing `dependencies`
pub fn install_command(dependencies: &[String]) -> String {
    let tool = if dependencies.iter().any(|d| d.starts_with(EXPO_PREFIX)) {
        "npx expo install"
    } else {
        "npm install"
    };
    format!("{} {}", tool, dependencies.join(" "))
}
