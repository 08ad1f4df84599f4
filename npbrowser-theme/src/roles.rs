// SPDX-License-Identifier: LGPL-3.0-only

//! Color role definitions.

/// Macro to implement string conversion methods for role enums.
///
/// This macro generates `as_str()` and `from_str()` implementations
/// for role enums to reduce boilerplate.
#[macro_export]
macro_rules! impl_role_string_conversion {
    ($enum_name:ident, { $($variant:ident => $str:literal),* $(,)? }) => {
        impl $enum_name {
            /// Get the string representation of the role (for TOML keys).
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)*
                }
            }

            /// Parse a role from a string (for TOML parsing).
            pub fn from_str(s: &str) -> Option<Self> {
                match s {
                    $($str => Some(Self::$variant),)*
                    _ => None,
                }
            }

            /// All roles, in declaration order.
            pub fn all() -> &'static [Self] {
                &[$(Self::$variant,)*]
            }
        }
    };
}

/// Semantic color roles.
///
/// Toolbar and chrome code asks the current theme for a role instead of a
/// concrete color, so the same code renders correctly in every theme type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    /// Primary icon tint.
    IconPrimary,
    /// Icon tint for disabled controls.
    IconDisabled,
    /// Accent used for pressed or highlighted actions.
    ActionPrimary,
    /// Base chrome background.
    Layer1,
    /// Primary text.
    TextPrimary,
    /// Separator and border lines.
    BorderPrimary,
}

impl_role_string_conversion!(ColorRole, {
    IconPrimary => "icon_primary",
    IconDisabled => "icon_disabled",
    ActionPrimary => "action_primary",
    Layer1 => "layer1",
    TextPrimary => "text_primary",
    BorderPrimary => "border_primary",
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_names_round_trip() {
        for role in ColorRole::all() {
            assert_eq!(ColorRole::from_str(role.as_str()), Some(*role));
        }
        assert_eq!(ColorRole::from_str("accent"), None);
    }
}
