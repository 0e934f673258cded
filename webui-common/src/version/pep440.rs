// Copyright 2025 OPPO.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Lenient PEP 440 version handling.
//!
//! Separators are loose (`-`, `_` and whitespace all act like `.`) and suffix
//! tokens may be glued to their number (`1.0rc1` == `1.0.rc.1`). Nothing in
//! here fails: garbage input gets a best-effort ordering.

use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;

pub const WILDCARD: &str = "*";

static SEPARATOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-_\s]+").unwrap());

// Longer tokens first so that `alpha1` is not split as `alph.a.1`.
static SUFFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(dev|alpha|beta|post|rc|a|b|c)(\d+)").unwrap());

static DOTS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.{2,}").unwrap());

/// Suffix ranks, lowest first. `None` is a missing segment, i.e. a plain release.
const SUFFIX_ORDER: [Option<&str>; 7] = [
    Some("dev"),
    Some("a"),
    Some("b"),
    Some("c"),
    Some("rc"),
    None,
    Some("post"),
];

/// Canonicalize separators and suffix punctuation.
///
/// An empty input yields an empty string. The result is idempotent:
/// `1.2.3dev1`, `1.2.3-dev1` and `1.2.3.dev.1` all become `1.2.3.dev.1`.
///
/// Surrounding whitespace and leading/trailing dots are trimmed on purpose,
/// so `dev1` becomes `dev.1` rather than `.dev.1` and no empty segment is
/// left at either end.
pub fn normalize_pep440_version(version: &str) -> String {
    let version = SEPARATOR_RE.replace_all(version.trim(), ".");
    let version = SUFFIX_RE.replace_all(&version, ".$1.$2");
    let version = DOTS_RE.replace_all(&version, ".");
    version.trim_matches('.').to_string()
}

/// Same as [`normalize_pep440_version`], but an absent version stays absent.
pub fn normalize_optional(version: Option<&str>) -> Option<String> {
    version.map(normalize_pep440_version)
}

/// Split a normalized version into its public part and optional local part.
pub(crate) fn split_local(normalized: &str) -> (&str, Option<&str>) {
    match normalized.split_once('+') {
        Some((public, local)) => (public, Some(local)),
        None => (normalized, None),
    }
}

pub(crate) fn segments(public: &str) -> Vec<&str> {
    if public.is_empty() {
        Vec::new()
    } else {
        public.split('.').collect()
    }
}

fn is_numeric(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

/// Compare two digit strings by value, without overflow for long runs.
fn cmp_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Rank of a non-numeric segment. Unknown tokens rank below `dev`.
pub(crate) fn suffix_rank(segment: Option<&str>) -> i32 {
    let token = segment.map(|s| match s.to_ascii_lowercase().as_str() {
        "alpha" => "a".to_string(),
        "beta" => "b".to_string(),
        other => other.to_string(),
    });

    SUFFIX_ORDER
        .iter()
        .position(|x| *x == token.as_deref())
        .map(|x| x as i32)
        .unwrap_or(-1)
}

fn compare_local(local1: Option<&str>, local2: Option<&str>) -> Ordering {
    let (local1, local2) = match (local1, local2) {
        (None, None) => return Ordering::Equal,
        (None, Some(_)) => return Ordering::Less,
        (Some(_), None) => return Ordering::Greater,
        (Some(a), Some(b)) if a == b => return Ordering::Equal,
        (Some(a), Some(b)) => (a, b),
    };

    let parts1: Vec<&str> = local1.split('.').collect();
    let parts2: Vec<&str> = local2.split('.').collect();

    for (p1, p2) in parts1.iter().zip(parts2.iter()) {
        let ord = match (is_numeric(p1), is_numeric(p2)) {
            (true, true) => cmp_numeric(p1, p2),
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => p1.to_ascii_lowercase().cmp(&p2.to_ascii_lowercase()),
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }

    // Unlike a plain positional tie, a longer local version with an equal
    // prefix sorts higher, so `1.0+abc < 1.0+abc.1` and antisymmetry holds.
    parts1.len().cmp(&parts2.len())
}

/// Order two version strings.
///
/// A `*` segment on either side ends the comparison as equal. A missing
/// trailing segment counts as a plain release: it sorts above every
/// pre-release token and below `post`.
pub fn compare_pep440_versions(version1: &str, version2: &str) -> Ordering {
    let v1 = normalize_pep440_version(version1);
    let v2 = normalize_pep440_version(version2);

    let (public1, local1) = split_local(&v1);
    let (public2, local2) = split_local(&v2);
    let segments1 = segments(public1);
    let segments2 = segments(public2);

    for i in 0..segments1.len().max(segments2.len()) {
        let s1 = segments1.get(i).copied();
        let s2 = segments2.get(i).copied();

        if s1 == Some(WILDCARD) || s2 == Some(WILDCARD) {
            trace!("wildcard at segment {} of '{}' vs '{}'", i, v1, v2);
            return Ordering::Equal;
        }

        let num1 = s1.filter(|s| is_numeric(s));
        let num2 = s2.filter(|s| is_numeric(s));
        let ord = match (num1, num2) {
            (Some(a), Some(b)) => cmp_numeric(a, b),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => suffix_rank(s1).cmp(&suffix_rank(s2)),
        };

        if ord != Ordering::Equal {
            return ord;
        }
    }

    compare_local(local1, local2)
}

/// Keep only `major.minor` of a version.
pub fn remove_after_minor_version(version: &str) -> String {
    let normalized = normalize_pep440_version(version);
    normalized.split('.').take(2).collect::<Vec<_>>().join(".")
}

/// Pick the condition that applies to `source` from a set of minimum
/// versions, one per release line, and check `source` against it.
///
/// The lowest condition on the same `major.minor` line as `source` wins;
/// without one, the highest condition applies. Wildcard conditions make the
/// comparator non-transitive, so this scans with `min_by`/`max_by` instead
/// of sorting. `conditions` is never reordered.
pub fn select_condition<'a, S: AsRef<str>>(source: &str, conditions: &'a [S]) -> Option<&'a str> {
    let source_minor = remove_after_minor_version(source);

    conditions
        .iter()
        .map(|x| x.as_ref())
        .filter(|x| remove_after_minor_version(x) == source_minor)
        .min_by(|a, b| compare_pep440_versions(a, b))
        .or_else(|| {
            conditions
                .iter()
                .map(|x| x.as_ref())
                .max_by(|a, b| compare_pep440_versions(a, b))
        })
}

/// Whether `source` satisfies the condition chosen by [`select_condition`].
/// An empty condition set places no constraint.
pub fn is_compatible_multiple_conditions<S: AsRef<str>>(source: &str, conditions: &[S]) -> bool {
    match select_condition(source, conditions) {
        Some(condition) => compare_pep440_versions(source, condition) != Ordering::Less,
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        for v in ["1.2.3dev1", "1.2.3-dev1", "1.2.3_dev1", "1.2.3 dev1", "1.2.3.dev.1"] {
            assert_eq!(normalize_pep440_version(v), "1.2.3.dev.1", "input {}", v);
        }

        assert_eq!(normalize_pep440_version("1.0a12.dev456"), "1.0.a.12.dev.456");
        assert_eq!(normalize_pep440_version("23.09.8rc2"), "23.09.8.rc.2");
        assert_eq!(normalize_pep440_version("1.0b2.post345"), "1.0.b.2.post.345");
        assert_eq!(normalize_pep440_version("1.0.0alpha1"), "1.0.0.alpha.1");
        assert_eq!(normalize_pep440_version("1.2--3__4"), "1.2.3.4");
        assert_eq!(normalize_pep440_version("1.0+abc.5"), "1.0+abc.5");
        assert_eq!(normalize_pep440_version("1.2.3.*"), "1.2.3.*");
        assert_eq!(normalize_pep440_version("dev1"), "dev.1");
        assert_eq!(normalize_pep440_version(" -1.0- "), "1.0");
    }

    #[test]
    fn test_normalize_absent() {
        assert_eq!(normalize_pep440_version(""), "");
        assert_eq!(normalize_pep440_version("   "), "");
        assert_eq!(normalize_optional(None), None);
        assert_eq!(normalize_optional(Some("1.0rc1")).as_deref(), Some("1.0.rc.1"));
    }

    #[test]
    fn test_normalize_idempotent() {
        let inputs = [
            "1.2.3dev1",
            "1.0a12.dev456",
            "1.0b2.post345.dev456",
            " 24.09.1rc2 ",
            "1.0+abc_7",
            "1..2...3",
            "a1b2c3",
            "-1.0-",
            "",
        ];
        for v in inputs {
            let once = normalize_pep440_version(v);
            assert_eq!(normalize_pep440_version(&once), once, "input {}", v);
        }
    }

    #[test]
    fn test_compare_chain() {
        let chain = [
            "1.dev0",
            "1.0.dev456",
            "1.0a1",
            "1.0a2.dev456",
            "1.0a12.dev456",
            "1.0a12",
            "1.0b1.dev456",
            "1.0b2",
            "1.0b2.post345.dev456",
            "1.0b2.post345",
            "1.0rc1.dev456",
            "1.0rc1",
            "1.0",
            "1.0+abc.5",
            "1.0+abc.7",
            "1.0+5",
            "1.0.post456.dev34",
            "1.0.post456",
            "1.0.15",
            "1.1.dev1",
        ];

        for pair in chain.windows(2) {
            assert_eq!(
                compare_pep440_versions(pair[0], pair[1]),
                Ordering::Less,
                "{} < {}",
                pair[0],
                pair[1]
            );
        }

        for (i, a) in chain.iter().enumerate() {
            assert_eq!(compare_pep440_versions(a, a), Ordering::Equal);
            for b in &chain[i + 1..] {
                assert_eq!(compare_pep440_versions(a, b), Ordering::Less, "{} < {}", a, b);
                assert_eq!(compare_pep440_versions(b, a), Ordering::Greater, "{} > {}", b, a);
            }
        }
    }

    #[test]
    fn test_compare_backend_versions() {
        assert_eq!(compare_pep440_versions("23.09.8rc2", "23.09.8.rc1"), Ordering::Greater);
        assert_eq!(compare_pep440_versions("23.09.8rc2", "23.09.8"), Ordering::Less);
        assert_eq!(compare_pep440_versions("24.03.0a1", "24.03.0rc2"), Ordering::Less);
        assert_eq!(compare_pep440_versions("24.03.0a1", "24.03.0dev5"), Ordering::Greater);
        assert_eq!(compare_pep440_versions("24.03.0dev3", "24.03.0dev3"), Ordering::Equal);
        assert_eq!(compare_pep440_versions("24.12.0", "25.15.0"), Ordering::Less);
        assert_eq!(compare_pep440_versions("24.09.1", "24.9.1"), Ordering::Equal);
        assert_eq!(compare_pep440_versions("1.0.alpha.1", "1.0a1"), Ordering::Equal);
        assert_eq!(compare_pep440_versions("1.0-beta-2", "1.0b2"), Ordering::Equal);
    }

    #[test]
    fn test_compare_wildcard() {
        assert_eq!(compare_pep440_versions("1.2.3.*", "1.2.3.dev.1"), Ordering::Equal);
        assert_eq!(compare_pep440_versions("1.2.3.*", "1.2.2.dev.1"), Ordering::Greater);
        assert_eq!(compare_pep440_versions("1.2.3.*", "1.2.4.dev.1"), Ordering::Less);
        assert_eq!(compare_pep440_versions("24.*", "24.03.0"), Ordering::Equal);
        assert_eq!(compare_pep440_versions("24.03.0", "24.*"), Ordering::Equal);
    }

    #[test]
    fn test_compare_lenient() {
        assert_eq!(compare_pep440_versions("", ""), Ordering::Equal);
        assert_eq!(compare_pep440_versions("", "1.0"), Ordering::Less);
        assert_eq!(compare_pep440_versions("1.0", ""), Ordering::Greater);
        assert_eq!(compare_pep440_versions("1.0.foo", "1.0.dev1"), Ordering::Less);
        assert_eq!(
            compare_pep440_versions("99999999999999999999999.0", "99999999999999999999998.0"),
            Ordering::Greater
        );
    }

    #[test]
    fn test_compare_local() {
        assert_eq!(compare_local(None, None), Ordering::Equal);
        assert_eq!(compare_local(None, Some("1")), Ordering::Less);
        assert_eq!(compare_local(Some("abc.5"), Some("abc.7")), Ordering::Less);
        assert_eq!(compare_local(Some("abc"), Some("5")), Ordering::Less);
        assert_eq!(compare_local(Some("ABC.1"), Some("abc.1")), Ordering::Equal);
        assert_eq!(compare_local(Some("abc"), Some("abd")), Ordering::Less);
        assert_eq!(compare_local(Some("abc"), Some("abc.1")), Ordering::Less);
    }

    #[test]
    fn test_suffix_rank() {
        assert!(suffix_rank(Some("dev")) < suffix_rank(Some("a")));
        assert_eq!(suffix_rank(Some("alpha")), suffix_rank(Some("a")));
        assert_eq!(suffix_rank(Some("BETA")), suffix_rank(Some("b")));
        assert!(suffix_rank(Some("rc")) < suffix_rank(None));
        assert!(suffix_rank(None) < suffix_rank(Some("post")));
        assert_eq!(suffix_rank(Some("unknown")), -1);
    }

    #[test]
    fn test_remove_after_minor_version() {
        assert_eq!(remove_after_minor_version("24.03.0a1"), "24.03");
        assert_eq!(remove_after_minor_version("24.09.1"), "24.09");
        assert_eq!(remove_after_minor_version("24"), "24");
        assert_eq!(remove_after_minor_version(""), "");
    }

    #[test]
    fn test_multiple_conditions() {
        let conditions = vec!["24.03.0".to_string(), "23.09.6".to_string()];

        assert_eq!(select_condition("23.09.8", &conditions), Some("23.09.6"));
        assert!(is_compatible_multiple_conditions("23.09.8", &conditions));

        assert_eq!(select_condition("22.01.0", &conditions), Some("24.03.0"));
        assert!(!is_compatible_multiple_conditions("22.01.0", &conditions));

        assert!(!is_compatible_multiple_conditions("23.09.5", &conditions));
        assert!(is_compatible_multiple_conditions("24.03.0", &conditions));
        assert!(is_compatible_multiple_conditions("24.09.0", &conditions));

        // The caller's order is untouched.
        assert_eq!(conditions, vec!["24.03.0", "23.09.6"]);
    }

    #[test]
    fn test_multiple_conditions_wildcard() {
        let mut conditions = vec!["24.*".to_string()];
        for i in 0..10 {
            conditions.push(format!("23.{:02}.*", i));
            conditions.push(format!("23.{:02}.{}", i, i + 1));
            conditions.push(format!("24.{:02}.{}", i, i % 3));
        }
        assert!(conditions.len() > 30);

        // Same release line: 24.03.0, since `24.*` sits on no single line.
        assert_eq!(select_condition("24.03.1", &conditions), Some("24.03.0"));
        assert!(is_compatible_multiple_conditions("24.03.1", &conditions));

        // No 25.x line: the highest condition applies.
        assert_eq!(select_condition("25.01.0", &conditions), Some("24.09.0"));
        assert!(is_compatible_multiple_conditions("25.01.0", &conditions));

        // 23.05.* comes first on its line and matches any 23.05 release.
        assert_eq!(select_condition("23.05.0", &conditions), Some("23.05.*"));
        assert!(is_compatible_multiple_conditions("23.05.0", &conditions));
        assert!(!is_compatible_multiple_conditions("22.01.0", &conditions));

        for source in ["24.03.1", "23.07.2rc1", "26.1.0", "", "24.*"] {
            let _ = select_condition(source, &conditions);
            let _ = is_compatible_multiple_conditions(source, &conditions);
        }
    }

    #[test]
    fn test_multiple_conditions_tie() {
        // Equal versions on the source line: the first one given is chosen.
        let conditions = ["24.03.0", "24.03.00", "23.09.1"];
        assert_eq!(select_condition("24.03.5", &conditions), Some("24.03.0"));

        // Equal maxima: the last one given is chosen.
        let conditions = ["24.9.0", "23.09.1", "24.09.0"];
        assert_eq!(select_condition("22.01.0", &conditions), Some("24.09.0"));
    }

    #[test]
    fn test_multiple_conditions_empty() {
        let conditions: [&str; 0] = [];
        assert_eq!(select_condition("24.03.0", &conditions), None);
        assert!(is_compatible_multiple_conditions("24.03.0", &conditions));
    }
}
