//! Rule gate: the two hard pre-conditions a candidate pair must pass
//! before any similarity work runs.

use crate::config::AmbiguousYearPolicy;
use crate::models::NormalizedRecord;

/// R1 — Secondary-Name rule (Name2).
///
/// `secondary_name` often carries the trailing hyphenated fragment of a
/// compound surname on one record while the other record spells the whole
/// surname out (e.g. surname="rohner-stassek", secondary_name="-stassek" on
/// the counterpart) — the suffix check below honors that convention.
pub fn secondary_name_rule(a: &NormalizedRecord, b: &NormalizedRecord) -> bool {
    let a_empty = a.secondary_name.is_empty();
    let b_empty = b.secondary_name.is_empty();

    match (a_empty, b_empty) {
        (true, true) => true,
        (false, false) => a.secondary_name == b.secondary_name,
        (false, true) => b.surname.ends_with(&a.secondary_name),
        (true, false) => a.surname.ends_with(&b.secondary_name),
    }
}

/// R2 — Birth-Year rule.
///
/// One side missing a year is ambiguous by default and rejected;
/// [`AmbiguousYearPolicy::Pass`] opts into treating it as non-disqualifying.
pub fn birth_year_rule(
    a: &NormalizedRecord,
    b: &NormalizedRecord,
    policy: AmbiguousYearPolicy,
) -> bool {
    match (a.effective_year, b.effective_year) {
        (None, None) => true,
        (Some(y_a), Some(y_b)) => y_a == y_b,
        _ => matches!(policy, AmbiguousYearPolicy::Pass),
    }
}

/// Both R1 and R2 must hold. R1 is evaluated first as it is cheaper
/// (string comparisons vs. an enum match, but more importantly it tends to
/// reject pairs before the year comparison is even needed).
pub fn passes_rule_gate(
    a: &NormalizedRecord,
    b: &NormalizedRecord,
    policy: AmbiguousYearPolicy,
) -> bool {
    secondary_name_rule(a, b) && birth_year_rule(a, b, policy)
}
