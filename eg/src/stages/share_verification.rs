#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::manual_assert)]

//! Per-share Chaum-Pedersen verification shared by stage S6 (direct shares),
//! stage S7 (recovered shares and the xor/malformed check), and stage S8
//! (which applies both to spoiled-ballot selections, since those are never
//! walked by S6 or S7).

use crate::coefficient::CoefficientValidationSet;
use crate::hash::hash_elems;
use crate::hash_args;
use crate::invariant::{warn, InvariantSet};
use crate::tally::{PlaintextTallySelection, Share};
use util::algebra::{FieldElement, Group, ScalarField};

/// Checks every direct share of `selection` against its guardian's public key,
/// per spec §4.9. Shares that are `Recovered` or `Malformed` are left to
/// [`verify_recovered_and_malformed_shares`].
pub(crate) fn verify_direct_shares(
    set: &mut InvariantSet,
    group: &Group,
    field: &ScalarField,
    base_hash: &FieldElement,
    guardians: &[CoefficientValidationSet],
    selection: &PlaintextTallySelection,
) {
    for share in &selection.shares {
        let Share::Direct {
            guardian_id,
            share: m_i,
            proof,
        } = share
        else {
            continue;
        };

        set.ensure("direct share is a valid group member", m_i.is_valid(group));
        set.ensure("share proof response is in bounds", proof.response.is_valid(field));
        set.ensure("share proof pad is a valid group member", proof.pad.is_valid(group));
        set.ensure("share proof data is a valid group member", proof.data.is_valid(group));

        let Some(guardian) = guardians.iter().find(|g| &g.owner_id == guardian_id) else {
            set.ensure("direct share references a known guardian", false);
            continue;
        };
        let Some(public_key) = guardian.public_key() else {
            set.ensure("referenced guardian has a public key", false);
            continue;
        };

        let expected_challenge = hash_elems(
            field,
            &hash_args![
                base_hash.clone(),
                selection.message.pad.clone(),
                selection.message.data.clone(),
                proof.pad.clone(),
                proof.data.clone(),
                m_i.clone()
            ],
        );
        set.ensure(
            "cᵢ = H(Q̄, Ā, B̄, aᵢ, bᵢ, Mᵢ)",
            proof.challenge == expected_challenge,
        );

        let g_v = group.g_exp(&proof.response);
        let a_k_c = proof.pad.mul(&public_key.exp(&proof.challenge, group), group);
        set.ensure("gᵛⁱ = aᵢ · Kᵢᶜⁱ (mod p)", g_v == a_k_c);

        let a_v = selection.message.pad.exp(&proof.response, group);
        let b_m_c = proof.data.mul(&m_i.exp(&proof.challenge, group), group);
        set.ensure("Āᵛⁱ = bᵢ · Mᵢᶜⁱ (mod p)", a_v == b_m_c);
    }
}

/// Checks the xor-invariant over every share of `selection`, and for each
/// `Recovered` share, its per-recovering-guardian Chaum-Pedersen proof against
/// the published `recovery_key`, per spec §4.10. `Direct` shares are left to
/// [`verify_direct_shares`].
pub(crate) fn verify_recovered_and_malformed_shares(
    set: &mut InvariantSet,
    group: &Group,
    field: &ScalarField,
    base_hash: &FieldElement,
    selection: &PlaintextTallySelection,
) {
    for share in &selection.shares {
        match share {
            Share::Direct { .. } => {}
            Share::Recovered {
                guardian_id,
                recovered_parts,
            } => {
                set.ensure("recovery has at least one recovering guardian", !recovered_parts.is_empty());

                for (recovering_guardian_id, part) in recovered_parts {
                    set.ensure("recovered share is a valid group member", part.share.is_valid(group));
                    set.ensure("recovery key is a valid group member", part.recovery_key.is_valid(group));
                    set.ensure(
                        "recovered-part proof response is in bounds",
                        part.proof.response.is_valid(field),
                    );
                    set.ensure("recovered-part proof pad is a valid group member", part.proof.pad.is_valid(group));
                    set.ensure("recovered-part proof data is a valid group member", part.proof.data.is_valid(group));

                    let expected_challenge = hash_elems(
                        field,
                        &hash_args![
                            base_hash.clone(),
                            selection.message.pad.clone(),
                            selection.message.data.clone(),
                            part.proof.pad.clone(),
                            part.proof.data.clone(),
                            part.share.clone()
                        ],
                    );
                    set.ensure(
                        "cᵢ,ₗ = H(Q̄, Ā, B̄, aᵢ,ₗ, bᵢ,ₗ, Mᵢ,ₗ)",
                        part.proof.challenge == expected_challenge,
                    );

                    let g_v = group.g_exp(&part.proof.response);
                    let a_key_c = part
                        .proof
                        .pad
                        .mul(&part.recovery_key.exp(&part.proof.challenge, group), group);
                    set.ensure("gᵛⁱ,ₗ = aᵢ,ₗ · recovery_keyᶜⁱ,ₗ (mod p)", g_v == a_key_c);

                    let a_v = selection.message.pad.exp(&part.proof.response, group);
                    let b_share_c = part.proof.data.mul(&part.share.exp(&part.proof.challenge, group), group);
                    set.ensure("Āᵛⁱ,ₗ = bᵢ,ₗ · Mᵢ,ₗᶜⁱ,ₗ (mod p)", a_v == b_share_c);

                    warn(format_args!(
                        "guardian {guardian_id}: recovery key contributed by {recovering_guardian_id} cannot be checked against Lagrange-weighted coefficients, which are not published"
                    ));
                }
            }
            Share::Malformed { guardian_id, .. } => {
                warn(format_args!(
                    "guardian {guardian_id}: tally share has neither a complete direct proof nor recovered parts"
                ));
                set.ensure("tally share contains exactly one proof or recovered part", false);
            }
        }
    }
}
