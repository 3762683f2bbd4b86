mod common;

use crc::{CRC_16_IBM_3740, Crc};
use pixgen::domain::crc::crc16_ccitt_false;
use pixgen::{Amount, PaymentRequest, compute_checksum, generate};
use rand::Rng;
use rand::distributions::Alphanumeric;
use rust_decimal::Decimal;

// CRC-16/IBM-3740 is the catalogue name of CRC-16/CCITT-FALSE.
const REFERENCE: Crc<u16> = Crc::<u16>::new(&CRC_16_IBM_3740);

fn random_text(rng: &mut impl Rng, max_len: usize) -> String {
    let len = rng.gen_range(0..=max_len);
    rng.sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

#[test]
fn test_crc_matches_reference_vectors() {
    for input in [&b""[..], b"123456789", b"6304", b"br.gov.bcb.pix"] {
        assert_eq!(crc16_ccitt_false(input), REFERENCE.checksum(input));
    }
}

#[test]
fn test_end_to_end_checksum_matches_reference() {
    let request = PaymentRequest::new(
        "123e4567-e89b-12d3-a456-426655440000",
        "JOAO SILVA",
        "RIO DE JANEIRO",
    )
    .unwrap()
    .with_amount("25.00".parse().unwrap())
    .with_description("Referente ao mes de Julho")
    .with_reference_id("***");

    let code = generate(&request);
    assert!(code.starts_with("000201"));
    assert!(code.contains("26870014br.gov.bcb.pix"));
    assert!(code.contains("52040000"));
    assert!(code.contains("5303986"));
    assert!(code.contains("540525.00"));
    assert!(code.contains("5802BR"));
    assert!(code.contains("5910JOAO SILVA"));
    assert!(code.contains("6014RIO DE JANEIRO"));
    assert!(code.contains("62070503***6304"));

    let (covered, checksum) = common::split_checksum(&code);
    assert!(covered.ends_with("6304"));
    assert_eq!(
        checksum,
        format!("{:04X}", REFERENCE.checksum(covered.as_bytes()))
    );
}

#[test]
fn test_random_requests_are_self_consistent() {
    let mut rng = rand::thread_rng();

    for _ in 0..200 {
        let mut request = PaymentRequest::new(
            random_text(&mut rng, 36),
            &random_text(&mut rng, 25),
            &random_text(&mut rng, 15),
        )
        .unwrap()
        .with_description(random_text(&mut rng, 20))
        .with_reference_id(random_text(&mut rng, 25));
        if rng.gen_bool(0.5) {
            let cents: i64 = rng.gen_range(0..10_000_000);
            request = request.with_amount(Amount::new(Decimal::new(cents, 2)).unwrap());
        }

        let code = generate(&request);
        assert_eq!(code, generate(&request));

        let (covered, checksum) = common::split_checksum(&code);
        assert_eq!(checksum.len(), 4);
        assert!(
            checksum
                .chars()
                .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
        );

        let payload = covered.strip_suffix("6304").unwrap();
        assert_eq!(compute_checksum(payload), checksum);
        assert_eq!(
            checksum,
            format!("{:04X}", REFERENCE.checksum(covered.as_bytes()))
        );
    }
}
