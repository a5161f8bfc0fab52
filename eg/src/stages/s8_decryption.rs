#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::manual_assert)]

//! Stage S8 — decryption: the published plaintext tally (and each spoiled
//! ballot's plaintext contests) satisfy the ElGamal decryption law
//! `g^tally mod p = T`, where `T` is the published decrypted selection value.
//!
//! When every share behind a selection is a direct guardian share, this stage
//! additionally checks `T = B * (prod M_i)^-1 mod p` against the aggregate
//! ciphertext. A selection with any recovered share skips that consistency
//! check (see stage S7) and only checks the decryption law itself.

use num_bigint::BigUint;

use crate::artifact::Artifact;
use crate::ballot::get_selection;
use crate::invariant::{warn, InvariantSet};
use crate::stages::share_verification::{verify_direct_shares, verify_recovered_and_malformed_shares};
use crate::tally::{PlaintextTallySelection, Share};
use util::algebra::{GroupElement, ScalarField};
use util::bigmodarith::BigModArith;

fn check_decryption_law(set: &mut InvariantSet, group: &util::algebra::Group, tally: u64, value: &GroupElement) {
    let expected = group.g_exp(&util::algebra::FieldElement::from(tally, &ScalarField::new_unchecked(group.order().clone())));
    set.ensure("M = gᵗ mod p", &expected == value);
}

fn check_aggregate_consistency(
    set: &mut InvariantSet,
    group: &util::algebra::Group,
    data: &GroupElement,
    selection: &PlaintextTallySelection,
) {
    if selection.shares.iter().any(|s| !matches!(s, Share::Direct { .. })) {
        warn("selection has a recovered share; skipping aggregate consistency check");
        return;
    }
    if selection.shares.is_empty() {
        set.ensure("selection has at least one guardian share", false);
        return;
    }

    let m_values: Vec<BigUint> = selection
        .shares
        .iter()
        .filter_map(|s| match s {
            Share::Direct { share, .. } => Some(share.as_biguint().clone()),
            _ => None,
        })
        .collect();
    let m_refs: Vec<&BigUint> = m_values.iter().collect();
    let product_m = GroupElement::from_biguint_unchecked(BigModArith::mul_p(group, &m_refs));

    let order_minus_one = group.order() - 1_u8;
    let inverse_product_m = product_m.pow(&order_minus_one, group);
    let expected_value = data.mul(&inverse_product_m, group);

    set.ensure(
        "B̄ = M · ∏ᵢMᵢ (mod p)",
        selection.value == expected_value,
    );
}

pub fn run(artifact: &Artifact) -> InvariantSet {
    let mut set = InvariantSet::new("S8 decryption");

    let group = &*crate::constants::STANDARD_GROUP;
    let field = ScalarField::new_unchecked(crate::constants::q());
    let base_hash = &artifact.context.crypto_extended_base_hash;

    for (contest_id, contest) in &artifact.plaintext_tally.contests {
        let Some(published_contest) = artifact.ciphertext_tally.contests.get(contest_id) else {
            set.ensure("plaintext tally contest has a matching ciphertext tally contest", false);
            continue;
        };

        for (selection_id, selection) in &contest.selections {
            check_decryption_law(&mut set, group, selection.tally, &selection.value);

            if let Some(published) = published_contest.selections.get(selection_id) {
                check_aggregate_consistency(&mut set, group, &published.data, selection);
            } else {
                set.ensure("plaintext selection has a matching ciphertext tally selection", false);
            }
        }
    }

    for (ballot_id, contests) in &artifact.plaintext_tally.spoiled_ballots {
        let Some(ballot) = artifact
            .spoiled_ballots
            .iter()
            .find(|b| &b.object_id == ballot_id)
        else {
            set.ensure("spoiled plaintext tally references a known spoiled ballot", false);
            continue;
        };

        for (contest_id, contest) in contests {
            for (selection_id, selection) in &contest.selections {
                check_decryption_law(&mut set, group, selection.tally, &selection.value);

                if let Some(ciphertext_selection) = get_selection(ballot, contest_id, selection_id) {
                    check_aggregate_consistency(&mut set, group, &ciphertext_selection.ciphertext.data, selection);
                } else {
                    set.ensure("spoiled plaintext selection has a matching ciphertext selection", false);
                }

                verify_direct_shares(&mut set, group, &field, base_hash, &artifact.coefficient_validation_sets, selection);
                verify_recovered_and_malformed_shares(&mut set, group, &field, base_hash, selection);
            }
        }
    }

    set
}
