/// Returns `true` if no element of `input` is divisible by 10.
pub fn none_match(input: &[i32]) -> bool {
    !input.iter().any(|&value| value % 10 == 0)
}

/// Returns `true` if at least one element satisfies `predicate`.
pub fn some_match<P>(input: &[i32], predicate: P) -> bool
where
    P: Fn(i32) -> bool,
{
    input.iter().any(|&value| predicate(value))
}

/// Maps every string through `function` and returns `true` if all results
/// satisfy `predicate`. An empty input matches vacuously.
///
/// # Examples
///
/// ```
/// use warmup_arrays::array::all_match;
///
/// let words = ["apple", "melon", "grape"];
/// assert!(all_match(&words, |s| s.len() as i32, |len| len == 5));
/// ```
pub fn all_match<S, F, P>(input: &[S], function: F, predicate: P) -> bool
where
    S: AsRef<str>,
    F: Fn(&str) -> i32,
    P: Fn(i32) -> bool,
{
    input.iter().all(|s| predicate(function(s.as_ref())))
}
