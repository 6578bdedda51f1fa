/*
 * Copyright 2024 Google LLC
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! Request matchers built from `envoy.config.route.v3` matcher protos.

use regex::Regex;

use crate::generated::envoy::config::route::v3::{
    header_matcher, HeaderMatcher as HeaderMatcherProto,
};
use crate::generated::envoy::kind::matcher::v3::string_matcher;

/// A matcher over a single request header, ready to be evaluated by the
/// routing layer.
#[derive(Clone, Debug)]
pub struct HeaderMatcher {
    /// The header name the matcher applies to.
    pub name: String,
    pub kind: HeaderMatchKind,
    /// Inverts the match result before it is checked.
    pub invert: bool,
}

/// How a header value is compared.
#[derive(Clone, Debug)]
pub enum HeaderMatchKind {
    Exact(String),
    SafeRegex(Regex),
    /// Half-open numeric interval `[start, end)` over the base-10 value.
    Range { start: i64, end: i64 },
    Present(bool),
    Prefix(String),
    Suffix(String),
    Contains(String),
}

impl PartialEq for HeaderMatcher {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.invert == other.invert && self.kind == other.kind
    }
}

impl Eq for HeaderMatcher {}

impl PartialEq for HeaderMatchKind {
    fn eq(&self, other: &Self) -> bool {
        use HeaderMatchKind::*;
        match (self, other) {
            (Exact(a), Exact(b)) => a == b,
            // Compiled patterns compare by their source text.
            (SafeRegex(a), SafeRegex(b)) => a.as_str() == b.as_str(),
            (Range { start: a, end: b }, Range { start: c, end: d }) => a == c && b == d,
            (Present(a), Present(b)) => a == b,
            (Prefix(a), Prefix(b)) => a == b,
            (Suffix(a), Suffix(b)) => a == b,
            (Contains(a), Contains(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for HeaderMatchKind {}

/// A fractional-percent matcher. The denominator is one of 100, 10000 or
/// 1000000.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FractionMatcher {
    pub numerator: u32,
    pub denominator: u32,
}

/// Builds a [`HeaderMatcher`] from its protobuf form.
///
/// Returns the failure detail as a plain string so callers can wrap it with
/// the enclosing entity's name.
pub fn parse_header_matcher(proto: &HeaderMatcherProto) -> Result<HeaderMatcher, String> {
    use header_matcher::HeaderMatchSpecifier;

    let kind = match &proto.header_match_specifier {
        Some(HeaderMatchSpecifier::ExactMatch(value)) => HeaderMatchKind::Exact(value.clone()),
        Some(HeaderMatchSpecifier::SafeRegexMatch(matcher)) => {
            HeaderMatchKind::SafeRegex(compile_regex(&matcher.regex)?)
        }
        Some(HeaderMatchSpecifier::RangeMatch(range)) => HeaderMatchKind::Range {
            start: range.start,
            end: range.end,
        },
        Some(HeaderMatchSpecifier::PresentMatch(present)) => HeaderMatchKind::Present(*present),
        Some(HeaderMatchSpecifier::PrefixMatch(prefix)) => HeaderMatchKind::Prefix(prefix.clone()),
        Some(HeaderMatchSpecifier::SuffixMatch(suffix)) => HeaderMatchKind::Suffix(suffix.clone()),
        Some(HeaderMatchSpecifier::ContainsMatch(value)) => {
            HeaderMatchKind::Contains(value.clone())
        }
        Some(HeaderMatchSpecifier::StringMatch(matcher)) => parse_string_match(matcher)?,
        None => return Err("Unknown header matcher type".into()),
    };

    Ok(HeaderMatcher {
        name: proto.name.clone(),
        kind,
        invert: proto.invert_match,
    })
}

fn parse_string_match(
    proto: &crate::generated::envoy::kind::matcher::v3::StringMatcher,
) -> Result<HeaderMatchKind, String> {
    use string_matcher::MatchPattern;

    match &proto.match_pattern {
        Some(MatchPattern::Exact(value)) => Ok(HeaderMatchKind::Exact(value.clone())),
        Some(MatchPattern::Prefix(prefix)) => Ok(HeaderMatchKind::Prefix(prefix.clone())),
        Some(MatchPattern::Suffix(suffix)) => Ok(HeaderMatchKind::Suffix(suffix.clone())),
        Some(MatchPattern::SafeRegex(matcher)) => {
            Ok(HeaderMatchKind::SafeRegex(compile_regex(&matcher.regex)?))
        }
        Some(MatchPattern::Contains(value)) => Ok(HeaderMatchKind::Contains(value.clone())),
        None => Err("Unknown string matcher type".into()),
    }
}

fn compile_regex(pattern: &str) -> Result<Regex, String> {
    Regex::new(pattern).map_err(|err| format!("invalid regex in header matcher: {err}"))
}
