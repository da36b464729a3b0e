//!Extensions for fancy_regex crate.
use anyhow::Result;
use fancy_regex::{Captures, Regex};

/// Extension trait for [fancy_regex::Regex] to provide more convenient methods.
pub trait FancyRegexExt {
    /// Replaces all matches of the regex in `input` with the string returned by `rep`.
    ///
    /// Unlike [Regex::replace_all], errors raised while matching (e.g. backtrack
    /// limit) are returned instead of panicking.
    /// Returns the new string and the number of replaced matches.
    fn try_replace_all<F>(&self, input: &str, rep: F) -> Result<(String, usize)>
    where
        F: FnMut(&Captures) -> String;
}

impl FancyRegexExt for Regex {
    fn try_replace_all<F>(&self, input: &str, mut rep: F) -> Result<(String, usize)>
    where
        F: FnMut(&Captures) -> String,
    {
        let mut result = String::with_capacity(input.len());
        let mut last = 0;
        let mut count = 0;
        for caps in self.captures_iter(input) {
            let caps = caps?;
            let whole = match caps.get(0) {
                Some(m) => m,
                None => continue,
            };
            result.push_str(&input[last..whole.start()]);
            result.push_str(&rep(&caps));
            last = whole.end();
            count += 1;
        }
        result.push_str(&input[last..]);
        Ok((result, count))
    }
}

#[test]
fn test_try_replace_all() {
    let re = Regex::new(r"(\w+)@(\w+)").unwrap();
    let (s, count) = re
        .try_replace_all("a@b, c@d and e", |caps| {
            format!("{}#{}", &caps[2], &caps[1])
        })
        .unwrap();
    assert_eq!(s, "b#a, d#c and e");
    assert_eq!(count, 2);

    let (s, count) = re.try_replace_all("nothing here", |_| String::new()).unwrap();
    assert_eq!(s, "nothing here");
    assert_eq!(count, 0);
}

#[test]
fn test_try_replace_all_lookahead() {
    let re = Regex::new(r"x(?!y)").unwrap();
    let (s, count) = re.try_replace_all("xy xz x", |_| "_".to_string()).unwrap();
    assert_eq!(s, "xy _z _");
    assert_eq!(count, 2);
}
