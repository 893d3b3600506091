use crate::error::ParseError;
use crate::theme::Scope;

/// Parsed flag set of an option-assignment statement.
///
/// Flags are independent bits; no combination is rejected at parse time.
/// `quiet` and `target` are carried for surface compatibility but never
/// acted on by this crate — a host may observe them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetOptionFlags {
    pub append: bool,
    pub format: bool,
    pub global: bool,
    pub only_if_unset: bool,
    pub quiet: bool,
    pub server: bool,
    pub target: Option<String>,
    pub unset: bool,
    pub window: bool,
}

impl SetOptionFlags {
    /// Consumes leading flag words from `args` and returns the parsed
    /// flags plus the remaining positional words.
    ///
    /// POSIX short-flag syntax over the fixed vocabulary `a F g o q s t u
    /// w`; boolean letters combine into clusters (`-goq`). `t` takes a
    /// string argument, attached (`-tother:3`) or detached (`-t other:3`).
    /// Parsing stops at `--`, at a bare `-`, or at the first word not
    /// starting with `-`.
    pub fn parse(args: &[String]) -> Result<(SetOptionFlags, Vec<String>), ParseError> {
        let mut flags = SetOptionFlags::default();
        let mut pos = 0;

        while pos < args.len() {
            let arg = &args[pos];
            if arg == "--" {
                pos += 1;
                break;
            }
            let Some(cluster) = arg.strip_prefix('-') else {
                break;
            };
            if cluster.is_empty() {
                break;
            }

            let mut letters = cluster.char_indices();
            while let Some((idx, letter)) = letters.next() {
                match letter {
                    'a' => flags.append = true,
                    'F' => flags.format = true,
                    'g' => flags.global = true,
                    'o' => flags.only_if_unset = true,
                    'q' => flags.quiet = true,
                    's' => flags.server = true,
                    'u' => flags.unset = true,
                    'w' => flags.window = true,
                    't' => {
                        let attached = &cluster[idx + letter.len_utf8()..];
                        let value = if !attached.is_empty() {
                            attached.to_string()
                        } else {
                            pos += 1;
                            args.get(pos)
                                .cloned()
                                .ok_or(ParseError::MissingFlagArgument('t'))?
                        };
                        flags.target = Some(value);
                        break;
                    }
                    other => return Err(ParseError::UnknownFlag(other)),
                }
            }
            pos += 1;
        }

        Ok((flags, args[pos..].to_vec()))
    }

    /// Selects the mapping this flag set targets. First match wins:
    /// server, then global+window, then window, then global; session is
    /// the default.
    pub fn scope(&self) -> Scope {
        if self.server {
            Scope::Server
        } else if self.global && self.window {
            Scope::GlobalWindow
        } else if self.window {
            Scope::Window
        } else if self.global {
            Scope::GlobalSession
        } else {
            Scope::Session
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn clusters_combine_booleans() {
        let (flags, rest) = SetOptionFlags::parse(&words(&["-goq", "k", "v"])).unwrap();
        assert!(flags.global && flags.only_if_unset && flags.quiet);
        assert!(!flags.append && !flags.server && !flags.window);
        assert_eq!(rest, words(&["k", "v"]));
    }

    #[test]
    fn target_takes_detached_and_attached_arguments() {
        let (flags, rest) = SetOptionFlags::parse(&words(&["-t", "other:3", "k"])).unwrap();
        assert_eq!(flags.target.as_deref(), Some("other:3"));
        assert_eq!(rest, words(&["k"]));

        let (flags, rest) = SetOptionFlags::parse(&words(&["-tother:3", "k"])).unwrap();
        assert_eq!(flags.target.as_deref(), Some("other:3"));
        assert_eq!(rest, words(&["k"]));
    }

    #[test]
    fn target_without_argument_fails() {
        assert_eq!(
            SetOptionFlags::parse(&words(&["-t"])),
            Err(ParseError::MissingFlagArgument('t'))
        );
    }

    #[test]
    fn unknown_letter_fails() {
        assert_eq!(
            SetOptionFlags::parse(&words(&["-gx"])),
            Err(ParseError::UnknownFlag('x'))
        );
    }

    #[test]
    fn parsing_stops_at_positionals_and_double_dash() {
        let (flags, rest) = SetOptionFlags::parse(&words(&["-g", "k", "-w"])).unwrap();
        assert!(flags.global && !flags.window);
        assert_eq!(rest, words(&["k", "-w"]));

        let (flags, rest) = SetOptionFlags::parse(&words(&["-g", "--", "-w"])).unwrap();
        assert!(flags.global && !flags.window);
        assert_eq!(rest, words(&["-w"]));

        let (_, rest) = SetOptionFlags::parse(&words(&["-", "k"])).unwrap();
        assert_eq!(rest, words(&["-", "k"]));
    }

    #[test]
    fn scope_selection_precedence() {
        let scope = |f: &mut dyn FnMut(&mut SetOptionFlags)| {
            let mut flags = SetOptionFlags::default();
            f(&mut flags);
            flags.scope()
        };

        assert_eq!(scope(&mut |_| {}), Scope::Session);
        assert_eq!(scope(&mut |f| f.global = true), Scope::GlobalSession);
        assert_eq!(scope(&mut |f| f.window = true), Scope::Window);
        assert_eq!(
            scope(&mut |f| {
                f.global = true;
                f.window = true;
            }),
            Scope::GlobalWindow
        );
        // Server beats everything else.
        assert_eq!(
            scope(&mut |f| {
                f.server = true;
                f.global = true;
                f.window = true;
            }),
            Scope::Server
        );
    }
}
