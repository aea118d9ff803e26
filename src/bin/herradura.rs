//! Herradura Demo - runs every protocol of the suite for Alice and Bob,
//! then the Eve probes against the public material.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use rand::rngs::{OsRng, StdRng};
use rand::{CryptoRng, RngCore, SeedableRng};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use herradura::probe::{self, Probe};
use herradura::{
    derive_shared_key, generate_exchange, haen, hpke, hpks, hske, keypair_from_pairs, BitVector,
    SuiteConfig,
};

/// Herradura suite demonstration
#[derive(Parser, Debug)]
#[command(name = "herradura")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Size in bits of every value (power of two, at least 8)
    #[arg(short, long)]
    bits: Option<usize>,

    /// Private-phase passes (i); defaults to a quarter of the bit length
    #[arg(short = 'i', long)]
    private_passes: Option<usize>,

    /// JSON configuration file with `bits` and `private_passes`
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed a deterministic RNG instead of the OS RNG
    #[arg(long)]
    seed: Option<u64>,

    /// Log every FSCX pass
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(if cli.verbose { "herradura=trace" } else { "warn" });

    let config = load_config(&cli)?;
    info!(bits = config.bits, private_passes = ?config.private_passes, "configuration loaded");

    let failures = match cli.seed {
        Some(seed) => run(&config, &mut StdRng::seed_from_u64(seed))?,
        None => run(&config, &mut OsRng)?,
    };

    if failures > 0 {
        bail!("{} protocol check(s) failed", failures);
    }
    println!("\n=== Demo Complete ===");
    Ok(())
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .try_init()
        .ok();
}

fn load_config(cli: &Cli) -> anyhow::Result<SuiteConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            SuiteConfig::from_json(&json).context("parsing configuration")?
        }
        None => SuiteConfig::default(),
    };
    if let Some(bits) = cli.bits {
        config.bits = bits;
    }
    if cli.private_passes.is_some() {
        config.private_passes = cli.private_passes;
    }
    config.validate().context("invalid configuration")?;
    Ok(config)
}

/// Prints a `+`/`-` verdict and counts protocol failures
#[derive(Default)]
struct Report {
    failures: usize,
}

impl Report {
    fn check(&mut self, ok: bool, pass: &str, fail: &str) {
        if ok {
            println!("+ {}", pass);
        } else {
            println!("- {}", fail);
            self.failures += 1;
        }
    }
}

fn show(label: &str, value: &BitVector) {
    println!("{:<14}: {}", label, value);
}

fn show_probe(probe: &Probe, target: &BitVector, success: &str, failure: &str) {
    println!("\n*** {}", probe.name);
    for (label, value) in &probe.steps {
        show(label, value);
    }
    if probe.recovers(target) {
        println!("+ {}", success);
    } else {
        println!("- {}", failure);
    }
}

fn run<R>(config: &SuiteConfig, rng: &mut R) -> anyhow::Result<usize>
where
    R: RngCore + CryptoRng,
{
    let split = config.split()?;
    let bits = split.bits();
    let mut report = Report::default();

    println!("=== Herradura Suite Demo ===\n");
    println!(
        "bits = {}, i = {}, r = {}\n",
        bits,
        split.private(),
        split.public()
    );

    let (alice, c_alice) = generate_exchange(&split, rng)?;
    let (bob, c_bob) = generate_exchange(&split, rng)?;
    let nonce = BitVector::random(bits, rng)?;
    let preshared = BitVector::random(bits, rng)?;
    let plaintext = BitVector::random(bits, rng)?;
    debug!("secret material sampled");

    show("A", alice.a());
    show("B", alice.b());
    show("A2", bob.a());
    show("B2", bob.b());
    show("C", &c_alice);
    show("C2", &c_bob);
    show("nonce", &nonce);
    show("preshared", &preshared);
    show("plaintext", &plaintext);

    println!("\n--- HKEX (key exchange)");
    let key_alice = derive_shared_key(&alice, &c_bob, &split)?;
    let key_bob = derive_shared_key(&bob, &c_alice, &split)?;
    show("skey (Alice)", &key_alice);
    show("skey (Bob)", &key_bob);
    report.check(
        key_alice == key_bob,
        "session keys are equal",
        "session keys differ",
    );

    println!("\n--- HSKE (symmetric key encryption)");
    let ct = hske::encrypt(&plaintext, &preshared, &split)?;
    let pt = hske::decrypt(&ct, &preshared, &split)?;
    show("E (Alice)", &ct);
    show("D (Bob)", &pt);
    report.check(
        pt == plaintext,
        "plaintext recovered with preshared key",
        "decryption with preshared key differs from plaintext",
    );

    // Alice publishes (C, B2, A2, r) and keeps (C2, B, A, r).
    let (public, private) = keypair_from_pairs(&alice, &bob, &split)?;

    println!("\n--- HPKS (public key signature)");
    let sig = hpks::sign(&private, &plaintext)?;
    let verified = hpks::verify(&public, &sig)?;
    show("S (Alice)", &sig);
    show("V (Bob)", &verified);
    report.check(
        hpks::verify_message(&public, &sig, &plaintext)?,
        "signature verifies",
        "signature does not verify",
    );

    println!("\n--- HPKS + HSKE with the preshared key made public");
    let sealed = hpks::seal(&private, &preshared, &plaintext, &split)?;
    let opened = hpks::open(&public, &preshared, &sealed, &split)?;
    show("S (Alice)", &sealed);
    show("D (Bob)", &opened);
    report.check(
        opened == plaintext,
        "sealed signature opens to the plaintext",
        "sealed signature opens to something else",
    );

    println!("\n--- HPKE (public key encryption)");
    let ct = hpke::encrypt(&public, &plaintext)?;
    let pt = hpke::decrypt(&private, &ct)?;
    show("E (Bob)", &ct);
    show("D (Alice)", &pt);
    report.check(
        pt == plaintext,
        "plaintext recovered with private key",
        "decryption with private key differs from plaintext",
    );

    println!("\n--- HAEN1 (one-to-one asymmetric encryption, equal keys)");
    let ct = haen::encrypt_paired(&plaintext, &key_alice, &alice, &split)?;
    let pt = haen::decrypt_paired(&ct, &bob, &split)?;
    show("E (Alice)", &ct);
    show("P (Bob)", &pt);
    report.check(
        pt == plaintext,
        "Bob decrypts Alice's message",
        "Bob's decryption differs from plaintext",
    );

    println!("\n--- HAEN2 (one-to-one asymmetric encryption, delegated key)");
    let ct = haen::encrypt_delegated(&plaintext, &key_bob, alice.b(), &split)?;
    let pt = haen::decrypt_delegated(&ct, alice.a(), &bob, &split)?;
    show("E (Alice)", &ct);
    show("P (Bob)", &pt);
    report.check(
        pt == plaintext,
        "Bob decrypts with the larger key",
        "Bob's decryption differs from plaintext",
    );

    println!("\n\n*** EVE bypass TESTS");
    show_probe(
        &probe::forge_without_a2(&public, &nonce)?,
        &nonce,
        "nonce fake signature 1 verifies with Alice's public key",
        "nonce fake signature 1 does not verify with Alice's public key",
    );
    show_probe(
        &probe::forge_with_public_pad(&public, &nonce)?,
        &nonce,
        "nonce fake signature 2 verifies with Alice's public key",
        "nonce fake signature 2 does not verify with Alice's public key",
    );
    show_probe(
        &probe::forge_sealed(&public, &preshared, &nonce, &split)?,
        &nonce,
        "fake sealed signature verifies with Alice's public key",
        "fake sealed signature does not verify with Alice's public key",
    );
    show_probe(
        &probe::forge_sealed_reordered(&public, &preshared, &nonce, &split)?,
        &nonce,
        "fake sealed signature v2 verifies with Alice's public key",
        "fake sealed signature v2 does not verify with Alice's public key",
    );
    let observed = hpke::encrypt(&public, &plaintext)?;
    show_probe(
        &probe::eavesdrop_hpke(&public, &observed)?,
        &plaintext,
        "Eve decrypts the plaintext without Alice's private key",
        "Eve cannot decrypt the plaintext without Alice's private key",
    );

    Ok(report.failures)
}
