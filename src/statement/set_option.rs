use crate::error::ParseError;
use crate::format;
use crate::statement::flags::SetOptionFlags;
use crate::statement::Statement;
use crate::theme::Theme;
use crate::words;

pub const SET_OPTION_COMMANDS: &[&str] = &["set", "set-option", "set-window-option"];

/// A `set` / `set-option` / `set-window-option` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetOptionStatement {
    pub flags: SetOptionFlags,
    pub option: String,
    /// Absent value behaves as the empty string wherever one is needed.
    pub value: Option<String>,
}

impl SetOptionStatement {
    pub(crate) fn try_parse(line: &str) -> Result<Statement, ParseError> {
        // A tokenizer failure here is terminal: the earlier grammars have
        // already rejected the line, so a broken quote is a real error.
        let args = words::split(line)?;

        let Some((command, rest)) = args.split_first() else {
            return Err(ParseError::not_supported("", SET_OPTION_COMMANDS));
        };
        if !SET_OPTION_COMMANDS.contains(&command.as_str()) {
            return Err(ParseError::not_supported(command.clone(), SET_OPTION_COMMANDS));
        }

        let mut rest = rest.to_vec();
        if command == "set-window-option" {
            // Establish window scope without the caller spelling out -w.
            rest.insert(0, "-w".to_string());
        }

        let (flags, positional) = SetOptionFlags::parse(&rest)?;
        let Some((option, remainder)) = positional.split_first() else {
            return Err(ParseError::NoOptionArgument);
        };

        Ok(Statement::SetOption(SetOptionStatement {
            flags,
            option: option.clone(),
            value: remainder.first().cloned(),
        }))
    }

    /// Applies this assignment to the store.
    ///
    /// Exactly one scope is selected from the flags; within it the
    /// precedence is only-if-unset, then unset, then format/append/overwrite.
    pub fn execute(&self, theme: &mut Theme) {
        let scope = self.flags.scope();

        if self.flags.only_if_unset && theme.options(scope).contains_key(&self.option) {
            return;
        }
        if self.flags.unset {
            theme.options_mut(scope).remove(&self.option);
            return;
        }

        let mut value = self.value.clone().unwrap_or_default();
        if self.flags.format {
            value = format::interpolate(&value, theme);
        }

        let options = theme.options_mut(scope);
        if self.flags.append {
            options.entry(self.option.clone()).or_default().push_str(&value);
        } else {
            options.insert(self.option.clone(), value);
        }
    }
}
