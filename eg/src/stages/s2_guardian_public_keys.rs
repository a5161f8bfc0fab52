#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::manual_assert)]

//! Stage S2 — guardian public keys: each guardian's Schnorr proofs of knowledge
//! of their polynomial coefficients, and the joint election public key formed by
//! their product.
//!
//! The producer's proof challenge is `H(K_{i,j}, h_{i,j})`, a two-argument hash
//! rather than the fully domain-separated challenge the design specification
//! describes; this is a known, intentional deviation and is checked as published
//! rather than reported as a failure.

use crate::artifact::Artifact;
use crate::hash::hash_elems;
use crate::hash_args;
use crate::invariant::InvariantSet;
use util::algebra::ScalarField;
use util::bigmodarith::BigModArith;

pub fn run(artifact: &Artifact) -> InvariantSet {
    let mut set = InvariantSet::new("S2 guardian public keys");

    let group = &*crate::constants::STANDARD_GROUP;
    let field = ScalarField::new_unchecked(crate::constants::q());

    let mut guardian_public_keys = Vec::new();

    for guardian in &artifact.coefficient_validation_sets {
        let commitments = &guardian.coefficient_commitments;
        let proofs = &guardian.coefficient_proofs;
        set.ensure(
            "guardian has one proof per coefficient commitment",
            commitments.len() == proofs.len() && !commitments.is_empty(),
        );

        for (commitment, proof) in commitments.iter().zip(proofs.iter()) {
            set.ensure(
                "coefficient commitment is a valid group member",
                commitment.is_valid(group),
            );
            set.ensure(
                "Schnorr proof response is in bounds",
                proof.response.is_valid(&field),
            );

            let expected_challenge = hash_elems(
                &field,
                &hash_args![proof.public_key.clone(), proof.commitment.clone()],
            );
            set.ensure(
                "Schnorr challenge c = H(K, h)",
                proof.challenge == expected_challenge,
            );

            let lhs = group.g_exp(&proof.response);
            let rhs = proof
                .commitment
                .mul(&proof.public_key.exp(&proof.challenge, group), group);
            set.ensure("g^u = h * K^c mod p", lhs == rhs);
        }

        if let Some(public_key) = guardian.public_key() {
            guardian_public_keys.push(public_key.as_biguint().clone());
        } else {
            set.ensure("guardian has a public key", false);
        }
    }

    let factors: Vec<&num_bigint::BigUint> = guardian_public_keys.iter().collect();
    let joint_key = BigModArith::mul_p(group, &factors);
    set.ensure(
        "K = product of guardian public keys",
        artifact.context.elgamal_public_key.as_biguint() == &joint_key,
    );

    let expected_extended_base_hash = hash_elems(
        &field,
        &hash_args![
            artifact.context.crypto_base_hash.clone(),
            artifact.context.elgamal_public_key.clone()
        ],
    );
    set.ensure(
        "Q̄ = H(Q, K)",
        artifact.context.crypto_extended_base_hash == expected_extended_base_hash,
    );

    set
}
