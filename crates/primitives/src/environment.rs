use serde::{Deserialize, Serialize};

/// Build-variant tag distinguishing the two coexisting UI trees during
/// migration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
	Legacy,
	Nextgen,
}

impl Environment {
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Legacy => "legacy",
			Self::Nextgen => "nextgen",
		}
	}
}

impl std::fmt::Display for Environment {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Environment scope for declarations that may span the migration.
///
/// Contracts and safe frames pin a concrete [`Environment`]; sacred
/// components may be scoped to either tree or to both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvScope {
	Legacy,
	Nextgen,
	Both,
}

impl EnvScope {
	/// Returns `true` when `env` falls inside this scope.
	pub const fn includes(self, env: Environment) -> bool {
		match self {
			Self::Both => true,
			Self::Legacy => matches!(env, Environment::Legacy),
			Self::Nextgen => matches!(env, Environment::Nextgen),
		}
	}

	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Legacy => "legacy",
			Self::Nextgen => "nextgen",
			Self::Both => "both",
		}
	}
}

impl From<Environment> for EnvScope {
	fn from(env: Environment) -> Self {
		match env {
			Environment::Legacy => Self::Legacy,
			Environment::Nextgen => Self::Nextgen,
		}
	}
}

impl std::fmt::Display for EnvScope {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn both_includes_either_environment() {
		assert!(EnvScope::Both.includes(Environment::Legacy));
		assert!(EnvScope::Both.includes(Environment::Nextgen));
	}

	#[test]
	fn concrete_scopes_include_only_themselves() {
		assert!(EnvScope::Legacy.includes(Environment::Legacy));
		assert!(!EnvScope::Legacy.includes(Environment::Nextgen));
		assert!(EnvScope::Nextgen.includes(Environment::Nextgen));
		assert!(!EnvScope::Nextgen.includes(Environment::Legacy));
	}

	#[test]
	fn scope_from_environment_is_concrete() {
		assert_eq!(EnvScope::from(Environment::Legacy), EnvScope::Legacy);
		assert_eq!(EnvScope::from(Environment::Nextgen), EnvScope::Nextgen);
	}
}
