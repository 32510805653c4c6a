// src/providers/mock.rs

use regex::Regex;
use std::sync::LazyLock;
use std::time::Duration;

use crate::config::DEFAULT_MOCK_LATENCY_MS;
use crate::errors::Result;
use crate::models::{Language, Platform, RequestParams, Solution};
use crate::providers::SolutionProvider;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*(\w+)\s*\}\}").expect("placeholder pattern is valid"));

const PYTHON_TEMPLATE: &str = r#"# Mock solution for {{platform}}: {{slug}}
from typing import List


class Solution:
    def twoSum(self, nums: List[int], target: int) -> List[int]:
        prevMap = {}  # val : index

        for i, n in enumerate(nums):
            diff = target - n
            if diff in prevMap:
                return [prevMap[diff], i]
            prevMap[n] = i
        return []
"#;

const JAVA_TEMPLATE: &str = r#"// Mock solution for {{platform}}: {{slug}}
import java.io.*;
import java.util.*;

public class Solution {

    public static void main(String[] args) {
        Scanner scan = new Scanner(System.in);
        int n = scan.nextInt();

        long sum = 0;
        for (int i = 0; i < n; i++) {
            sum += scan.nextInt();
        }
        System.out.println(sum);
    }
}
"#;

const CPP_TEMPLATE: &str = r#"// Mock solution for {{platform}}: {{slug}}
#include <bits/stdc++.h>
using namespace std;

void solve() {
    int n;
    cin >> n;
    vector<int> a(n);
    for (int i = 0; i < n; i++) cin >> a[i];

    sort(a.begin(), a.end());
    cout << a[n - 1] - a[0] << endl;
}

int main() {
    ios::sync_with_stdio(0);
    cin.tie(0);
    int t;
    cin >> t;
    while (t--) {
        solve();
    }
    return 0;
}
"#;

const JAVASCRIPT_TEMPLATE: &str = r#"// Mock solution for {{platform}}: {{slug}}
/**
 * @param {number[]} nums
 * @param {number} target
 * @return {number[]}
 */
var twoSum = function (nums, target) {
    const prevMap = new Map(); // val : index

    for (let i = 0; i < nums.length; i++) {
        const diff = target - nums[i];
        if (prevMap.has(diff)) {
            return [prevMap.get(diff), i];
        }
        prevMap.set(nums[i], i);
    }
    return [];
};
"#;

/// Canned template and its complexity annotation for a language.
fn template_for(language: Language) -> (&'static str, &'static str) {
    match language {
        Language::Python => (PYTHON_TEMPLATE, "O(n) time | O(n) space"),
        Language::Java => (JAVA_TEMPLATE, "O(N) time"),
        Language::Cpp => (CPP_TEMPLATE, "O(N log N) time"),
        Language::Javascript => (JAVASCRIPT_TEMPLATE, "O(n) time | O(n) space"),
    }
}

/// Replaces `{{key}}` placeholders. Unknown keys are left in place.
fn render_template(template: &str, slug: &str, platform: Platform) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &regex::Captures| match &caps[1] {
            "slug" => slug.to_string(),
            "platform" => platform.label().to_string(),
            _ => caps[0].to_string(),
        })
        .into_owned()
}

/// Builds the canned solution without any delay.
pub fn mock_solution(slug: &str, platform: Platform, language: Language) -> Solution {
    let (template, complexity) = template_for(language);
    Solution {
        slug: Some(slug.to_string()),
        platform: Some(platform.as_str().to_string()),
        language: Some(language.as_str().to_string()),
        code: render_template(template, slug, platform),
        complexity: Some(complexity.to_string()),
    }
}

/// Offline stand-in for the solver service. Deterministic, but answers
/// only after `latency` to mimic a network round trip.
#[derive(Debug, Clone)]
pub struct MockProvider {
    latency: Duration,
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_MOCK_LATENCY_MS))
    }
}

impl MockProvider {
    /// Creates a new `MockProvider`.
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    pub async fn generate(&self, slug: &str, platform: Platform, language: Language) -> Solution {
        tokio::task::yield_now().await;
        tokio::time::sleep(self.latency).await;
        log::info!("🧪 Mock solution for {} '{}' in {}", platform.label(), slug, language);
        mock_solution(slug, platform, language)
    }
}

impl SolutionProvider for MockProvider {
    async fn solve(&self, params: &RequestParams) -> Result<Solution> {
        Ok(self.generate(&params.slug, params.platform, params.language).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_mock_solution_is_deterministic() {
        let first = mock_solution("two-sum", Platform::Leetcode, Language::Python);
        let second = mock_solution("two-sum", Platform::Leetcode, Language::Python);
        assert_eq!(first.code, second.code);
        assert_eq!(first, second);
    }

    #[test]
    fn test_header_names_platform_and_slug() {
        let solution = mock_solution("1234/A", Platform::Codeforces, Language::Cpp);
        let header = solution.code.lines().next().unwrap();
        assert_eq!(header, "// Mock solution for Codeforces: 1234/A");
        assert_eq!(solution.complexity.as_deref(), Some("O(N log N) time"));
    }

    #[test]
    fn test_platform_only_changes_the_label() {
        for language in Language::ALL {
            let leetcode = mock_solution("p", Platform::Leetcode, language);
            let atcoder = mock_solution("p", Platform::Atcoder, language);

            let body = |code: &str| code.lines().skip(1).collect::<Vec<_>>().join("\n");
            assert_eq!(body(&leetcode.code), body(&atcoder.code));
            assert_ne!(leetcode.code, atcoder.code);
            assert_eq!(leetcode.complexity, atcoder.complexity);
        }
    }

    #[test]
    fn test_each_language_has_its_own_template() {
        let codes: Vec<String> = Language::ALL
            .into_iter()
            .map(|l| mock_solution("two-sum", Platform::Leetcode, l).code)
            .collect();
        assert!(codes[0].contains("def twoSum"));
        assert!(codes[1].contains("public class Solution"));
        assert!(codes[2].contains("#include <bits/stdc++.h>"));
        assert!(codes[3].contains("var twoSum"));
    }

    #[test]
    fn test_slug_is_inserted_literally() {
        let solution = mock_solution("a-$1-{{platform}}", Platform::Hackerrank, Language::Java);
        assert!(solution.code.starts_with("// Mock solution for HackerRank: a-$1-{{platform}}\n"));
    }

    #[tokio::test]
    async fn test_generate_waits_for_latency() {
        let provider = MockProvider::new(Duration::from_millis(50));
        let start = Instant::now();
        let solution = provider
            .generate("two-sum", Platform::Leetcode, Language::Python)
            .await;
        assert!(start.elapsed() >= Duration::from_millis(50));
        assert_eq!(solution.language.as_deref(), Some("python"));
        assert_eq!(solution.complexity.as_deref(), Some("O(n) time | O(n) space"));
    }
}
