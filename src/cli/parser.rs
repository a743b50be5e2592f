/// Switch parser for the process argument vector.
///
/// Tokens prefixed with `/`, `-`, or `--` open a new switch; everything else
/// is collected as parameters of the switch currently open. Tokens appearing
/// before the first switch land in the reserved `--default` bucket. A switch
/// token may carry an inline parameter list (`--key=a,b,c` or `--key:a`).
/// Short forms registered via [`ArgParser::register_alias`] are resolved to
/// their long form before the bucket is stored, so queries accept either.
use std::collections::HashMap;
use std::mem;

use thiserror::Error;

/// Bucket name for tokens preceding the first switch.
pub const DEFAULT_BUCKET: &str = "--default";

const SWITCH_PREFIXES: [&str; 3] = ["--", "-", "/"];
const PARAM_SEPARATOR: char = ',';

/// A short-form switch alias was registered twice.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("switch alias '{0}' is already registered")]
pub struct DuplicateAliasError(pub String);

/// Parses an argument vector into switch → parameter-list buckets.
///
/// Construct with the full argument vector (index 0 is the invoking
/// executable's path), register aliases, call [`parse`](Self::parse) once,
/// then query. Queries issued before `parse` see an empty result set.
#[derive(Debug, Default)]
pub struct ArgParser {
    args: Vec<String>,
    invocation_path: String,
    aliases: HashMap<String, String>,
    parsed: HashMap<String, Vec<String>>,
}

impl ArgParser {
    /// Create a parser over `args`, where `args[0]` is the program path.
    #[must_use]
    pub fn new(args: Vec<String>) -> Self {
        Self {
            args,
            ..Self::default()
        }
    }

    /// Register `short` as an alias that resolves to `long`.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateAliasError`] if `short` is already registered.
    pub fn register_alias(
        &mut self,
        short: impl Into<String>,
        long: impl Into<String>,
    ) -> Result<(), DuplicateAliasError> {
        let short = short.into();
        if self.aliases.contains_key(&short) {
            return Err(DuplicateAliasError(short));
        }
        self.aliases.insert(short, long.into());
        Ok(())
    }

    /// Scan the argument vector into switch buckets.
    ///
    /// Re-parsing discards all prior results. A switch supplied twice keeps
    /// only its last occurrence's parameters. The `--default` bucket is
    /// stored only when free tokens actually preceded the first switch.
    pub fn parse(&mut self) {
        self.parsed.clear();
        self.invocation_path = self.args.first().cloned().unwrap_or_default();

        let tokens = self.args.get(1..).map(<[String]>::to_vec).unwrap_or_default();
        let mut key = String::from(DEFAULT_BUCKET);
        let mut params: Vec<String> = Vec::new();

        for token in tokens {
            if is_switch_token(&token) {
                self.commit(mem::take(&mut key), mem::take(&mut params));
                let (name, inline) = split_switch_token(&token);
                key = self.expand_switch(name).to_owned();
                params = inline;
            } else {
                params.push(token);
            }
        }
        self.commit(key, params);
    }

    /// The program path the parser was invoked with (`args[0]`).
    #[must_use]
    pub fn invocation_path(&self) -> &str {
        &self.invocation_path
    }

    /// Resolve a switch name through the alias table.
    ///
    /// Unregistered names come back unchanged; this never fails.
    #[must_use]
    pub fn expand_switch<'a>(&'a self, name: &'a str) -> &'a str {
        self.aliases.get(name).map_or(name, String::as_str)
    }

    /// The parameter list of a switch, or `None` if it was never supplied.
    #[must_use]
    pub fn switch_arguments(&self, name: &str) -> Option<&[String]> {
        self.parsed
            .get(self.expand_switch(name))
            .map(Vec::as_slice)
    }

    /// Whether a switch (or its long form) was supplied.
    #[must_use]
    pub fn switch_exists(&self, name: &str) -> bool {
        self.parsed.contains_key(self.expand_switch(name))
    }

    /// Dual-mode arity check: when the only parsed entry is the default
    /// bucket, compares its parameter count against `required`; otherwise
    /// compares the number of parsed switches.
    #[allow(dead_code)]
    #[must_use]
    pub fn matches_required_count(&self, required: usize) -> bool {
        if self.parsed.len() == 1 {
            if let Some(free) = self.parsed.get(DEFAULT_BUCKET) {
                return free.len() >= required;
            }
        }
        self.parsed.len() >= required
    }

    /// Whether `--help` (or an alias of it) was supplied.
    #[must_use]
    pub fn help_requested(&self) -> bool {
        self.switch_exists("--help")
    }

    /// Whether `--version` was supplied.
    #[must_use]
    pub fn version_requested(&self) -> bool {
        self.switch_exists("--version")
    }

    /// Whether `--debug` was supplied.
    #[must_use]
    pub fn debug_requested(&self) -> bool {
        self.switch_exists("--debug")
    }

    fn commit(&mut self, key: String, params: Vec<String>) {
        // The default bucket is only meaningful when it holds tokens.
        if key == DEFAULT_BUCKET && params.is_empty() {
            return;
        }
        self.parsed.insert(key, params);
    }
}

fn is_switch_token(token: &str) -> bool {
    SWITCH_PREFIXES.iter().any(|p| token.starts_with(p))
}

/// Split a switch token into its name and inline parameter list.
///
/// The name is cut at the first `:` when one exists, else at the first `=`;
/// the parameter list is taken after the first `=` when one exists, else
/// after the first `:`, and split on `,`. The asymmetry is deliberate and
/// matters only when a token carries both characters.
fn split_switch_token(token: &str) -> (&str, Vec<String>) {
    let name = match token.find(':') {
        Some(i) => &token[..i],
        None => token.find('=').map_or(token, |i| &token[..i]),
    };

    let params = token
        .find('=')
        .or_else(|| token.find(':'))
        .map(|i| {
            token[i + 1..]
                .split(PARAM_SEPARATOR)
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default();

    (name, params)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser(args: &[&str]) -> ArgParser {
        let mut p = ArgParser::new(args.iter().map(|s| (*s).to_owned()).collect());
        p.parse();
        p
    }

    #[test]
    fn free_tokens_fill_default_bucket_in_order() {
        let p = parser(&["prog", "alpha", "beta", "gamma"]);
        assert_eq!(
            p.switch_arguments(DEFAULT_BUCKET),
            Some(["alpha".to_owned(), "beta".to_owned(), "gamma".to_owned()].as_slice())
        );
    }

    #[test]
    fn invocation_path_is_retained() {
        let p = parser(&["/usr/local/bin/prog", "--x"]);
        assert_eq!(p.invocation_path(), "/usr/local/bin/prog");
    }

    #[test]
    fn alias_resolves_for_both_forms() {
        let mut p = ArgParser::new(vec!["prog".into(), "/s".into()]);
        p.register_alias("/s", "--silent").unwrap();
        p.parse();
        assert!(p.switch_exists("/s"));
        assert!(p.switch_exists("--silent"));
    }

    #[test]
    fn duplicate_alias_is_rejected() {
        let mut p = ArgParser::new(vec!["prog".into()]);
        p.register_alias("/s", "--silent").unwrap();
        let err = p.register_alias("/s", "--something-else").unwrap_err();
        assert_eq!(err, DuplicateAliasError("/s".into()));
    }

    #[test]
    fn reparse_discards_prior_results() {
        let mut p = ArgParser::new(vec!["prog".into(), "--x".into(), "one".into()]);
        p.parse();
        assert!(p.switch_exists("--x"));
        p.args = vec!["prog".into(), "--y".into()];
        p.parse();
        assert!(!p.switch_exists("--x"));
        assert!(p.switch_exists("--y"));
    }

    #[test]
    fn inline_equals_list_splits_on_comma() {
        let p = parser(&["prog", "--key=a,b,c"]);
        assert_eq!(
            p.switch_arguments("--key"),
            Some(["a".to_owned(), "b".to_owned(), "c".to_owned()].as_slice())
        );
    }

    #[test]
    fn inline_colon_single_param() {
        let p = parser(&["prog", "--key:a"]);
        assert_eq!(p.switch_arguments("--key"), Some(["a".to_owned()].as_slice()));
    }

    #[test]
    fn inline_and_following_params_accumulate() {
        let p = parser(&["prog", "--key=a", "b", "c"]);
        assert_eq!(
            p.switch_arguments("--key"),
            Some(["a".to_owned(), "b".to_owned(), "c".to_owned()].as_slice())
        );
    }

    #[test]
    fn duplicate_switch_keeps_last_occurrence() {
        let p = parser(&["prog", "--x", "1", "--x", "2"]);
        assert_eq!(p.switch_arguments("--x"), Some(["2".to_owned()].as_slice()));
    }

    #[test]
    fn required_count_uses_default_bucket_params() {
        let p = parser(&["prog", "a", "b"]);
        assert!(p.matches_required_count(2));
        assert!(!p.matches_required_count(3));
    }

    #[test]
    fn required_count_uses_switch_count() {
        let p = parser(&["prog", "--x", "--y"]);
        assert!(p.matches_required_count(2));
        assert!(!p.matches_required_count(3));
    }

    #[test]
    fn unregistered_switch_expands_to_itself() {
        let p = parser(&["prog"]);
        assert_eq!(p.expand_switch("--nope"), "--nope");
        assert!(!p.switch_exists("--nope"));
        assert_eq!(p.switch_arguments("--nope"), None);
    }

    #[test]
    fn default_bucket_absent_when_first_token_is_switch() {
        let p = parser(&["prog", "--x"]);
        assert!(!p.switch_exists(DEFAULT_BUCKET));
        assert!(p.matches_required_count(1));
    }

    #[test]
    fn bare_prefix_is_a_literal_switch_name() {
        let p = parser(&["prog", "-", "param"]);
        assert_eq!(p.switch_arguments("-"), Some(["param".to_owned()].as_slice()));
    }

    #[test]
    fn slash_prefix_opens_a_switch() {
        let p = parser(&["prog", "/tls"]);
        assert!(p.switch_exists("/tls"));
    }

    #[test]
    fn mixed_separators_follow_name_colon_params_equals() {
        // Name is cut at ':', parameters are taken after '='.
        let p = parser(&["prog", "--key:a=b"]);
        assert_eq!(p.switch_arguments("--key"), Some(["b".to_owned()].as_slice()));
    }

    #[test]
    fn convenience_queries_resolve_aliases() {
        let mut p = ArgParser::new(vec!["prog".into(), "/?".into()]);
        p.register_alias("/?", "--help").unwrap();
        p.parse();
        assert!(p.help_requested());
        assert!(!p.version_requested());
        assert!(!p.debug_requested());
    }

    #[test]
    fn queries_before_parse_are_empty() {
        let p = ArgParser::new(vec!["prog".into(), "--x".into()]);
        assert!(!p.switch_exists("--x"));
        assert_eq!(p.switch_arguments("--x"), None);
        assert_eq!(p.invocation_path(), "");
    }
}
