//! Fixed vectors and cross-length properties through the public API.

use herradura::{
    derive_shared_key, fscx, fscx_by_bits, generate_keypair, hpke, hpks, hske, probe, revolve,
    BitVector, HerraduraError, SecretPair, Split, SuiteConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

const LENGTHS: [usize; 7] = [8, 16, 32, 64, 128, 256, 512];

fn bv(bytes: &[u8]) -> BitVector {
    BitVector::from_bytes(bytes).unwrap()
}

fn pair(a: &[u8], b: &[u8]) -> SecretPair {
    SecretPair::new(bv(a), bv(b)).unwrap()
}

#[test]
fn eight_bit_exchange_vector() {
    let split = Split::new(8, 2, 6).unwrap();
    let alice = pair(&[0x3c], &[0x81]);
    let bob = pair(&[0x5a], &[0x24]);

    let c = alice.commit(&split).unwrap();
    let c2 = bob.commit(&split).unwrap();
    assert_eq!(c.to_hex(), "66");
    assert_eq!(c2.to_hex(), "66");
    assert_eq!(c, revolve(&bv(&[0x3c]), &bv(&[0x81]), 2).unwrap());

    let k_alice = derive_shared_key(&alice, &c2, &split).unwrap();
    let k_bob = derive_shared_key(&bob, &c, &split).unwrap();
    assert_eq!(k_alice.to_hex(), "00");
    assert_eq!(k_alice, k_bob);
}

#[test]
fn sixteen_bit_exchange_vector() {
    let split = Split::quarter(16).unwrap();
    let alice = pair(&[0x3c, 0x5a], &[0x81, 0x24]);
    let bob = pair(&[0xde, 0xad], &[0xbe, 0xef]);

    let c = alice.commit(&split).unwrap();
    let c2 = bob.commit(&split).unwrap();
    assert_eq!(c.to_hex(), "dbbd");
    assert_eq!(c2.to_hex(), "5e87");

    let k_alice = derive_shared_key(&alice, &c2, &split).unwrap();
    let k_bob = derive_shared_key(&bob, &c, &split).unwrap();
    assert_eq!(k_alice.to_hex(), "7ec1");
    assert_eq!(k_bob.to_hex(), "7ec1");
}

#[test]
fn sixteen_bit_hske_vector() {
    let split = Split::quarter(16).unwrap();
    let pt = bv(&[0x12, 0x34]);
    let key = bv(&[0xca, 0xfe]);

    let ct = hske::encrypt(&pt, &key, &split).unwrap();
    assert_eq!(ct.to_hex(), "4d3e");
    assert_eq!(hske::decrypt(&ct, &key, &split).unwrap(), pt);
}

#[test]
fn single_step_vector() {
    assert_eq!(fscx(&bv(&[0x3c]), &bv(&[0x81])).unwrap().to_hex(), "18");
}

#[test]
fn formulations_agree_at_every_length() {
    let mut rng = StdRng::seed_from_u64(100);
    for bits in LENGTHS {
        let a = BitVector::random(bits, &mut rng).unwrap();
        let b = BitVector::random(bits, &mut rng).unwrap();
        assert_eq!(fscx(&a, &b).unwrap(), fscx_by_bits(&a, &b).unwrap());
    }
}

#[test]
fn protocols_hold_at_every_length() {
    let mut rng = StdRng::seed_from_u64(101);
    for bits in LENGTHS {
        let split = Split::quarter(bits).unwrap();

        let alice = SecretPair::random(bits, &mut rng).unwrap();
        let bob = SecretPair::random(bits, &mut rng).unwrap();
        let c = alice.commit(&split).unwrap();
        let c2 = bob.commit(&split).unwrap();
        assert_eq!(
            derive_shared_key(&alice, &c2, &split).unwrap(),
            derive_shared_key(&bob, &c, &split).unwrap()
        );

        let key = BitVector::random(bits, &mut rng).unwrap();
        let msg = BitVector::random(bits, &mut rng).unwrap();
        let ct = hske::encrypt(&msg, &key, &split).unwrap();
        assert_eq!(hske::decrypt(&ct, &key, &split).unwrap(), msg);

        let (public, private) = generate_keypair(&split, &mut rng).unwrap();
        let sig = hpks::sign(&private, &msg).unwrap();
        assert_eq!(hpks::verify(&public, &sig).unwrap(), msg);

        let ct = hpke::encrypt(&public, &msg).unwrap();
        assert_eq!(hpke::decrypt(&private, &ct).unwrap(), msg);
    }
}

#[test]
fn configured_split_drives_protocols() {
    let config = SuiteConfig::new(64).with_private_passes(8);
    let split = config.split().unwrap();
    let mut rng = StdRng::seed_from_u64(102);

    let key = BitVector::random(64, &mut rng).unwrap();
    let msg = BitVector::random(64, &mut rng).unwrap();
    let ct = hske::encrypt(&msg, &key, &split).unwrap();
    assert_eq!(ct, revolve(&msg, &key, 8).unwrap());
    assert_eq!(hske::decrypt(&ct, &key, &split).unwrap(), msg);
}

#[test]
fn eve_outcomes_at_every_length() {
    let mut rng = StdRng::seed_from_u64(103);
    for bits in LENGTHS {
        let split = Split::quarter(bits).unwrap();
        let (public, _) = generate_keypair(&split, &mut rng).unwrap();
        let nonce = BitVector::random(bits, &mut rng).unwrap();
        let preshared = BitVector::random(bits, &mut rng).unwrap();
        let plaintext = BitVector::random(bits, &mut rng).unwrap();

        // Short vectors can hit a zero pad by chance; each construction
        // succeeds exactly when its degenerate case occurs.
        let pad = public.pad().unwrap();
        let revolved = revolve(
            public.c(),
            public.b2(),
            public.public_passes() as isize,
        )
        .unwrap();

        let naive = probe::forge_without_a2(&public, &nonce).unwrap();
        assert_eq!(naive.recovers(&nonce), public.a2().is_zero());

        let padded = probe::forge_with_public_pad(&public, &nonce).unwrap();
        assert!(padded.recovers(&nonce));

        let sealed = probe::forge_sealed(&public, &preshared, &nonce, &split).unwrap();
        assert_eq!(sealed.recovers(&nonce), pad.is_zero());

        let reordered =
            probe::forge_sealed_reordered(&public, &preshared, &nonce, &split).unwrap();
        assert_eq!(reordered.recovers(&nonce), pad.is_zero());
        assert_eq!(reordered.step("D"), Some(&pad.xor(&nonce).unwrap()));

        let observed = hpke::encrypt(&public, &plaintext).unwrap();
        let eavesdrop = probe::eavesdrop_hpke(&public, &observed).unwrap();
        assert_eq!(
            eavesdrop.recovers(&plaintext),
            pad == plaintext || revolved.is_zero()
        );
        assert_eq!(eavesdrop.step("E2"), Some(&plaintext));
        if bits >= 64 {
            assert!(!naive.recovers(&nonce));
            assert!(!sealed.recovers(&nonce));
            assert!(!eavesdrop.recovers(&plaintext));
        }
    }
}

#[test]
fn errors_surface_at_the_boundary() {
    assert!(matches!(
        Split::new(8, 2, 5),
        Err(HerraduraError::InvalidSplit { .. })
    ));
    assert!(matches!(
        revolve(&bv(&[0x01]), &bv(&[0x02]), -3),
        Err(HerraduraError::InvalidPassCount(-3))
    ));
    assert!(matches!(
        fscx(&bv(&[0x01]), &bv(&[0x02, 0x03])),
        Err(HerraduraError::LengthMismatch { left: 8, right: 16 })
    ));
}
