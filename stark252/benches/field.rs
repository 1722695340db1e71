//! STARK curve `FieldElement` benchmarks

use criterion::{criterion_group, criterion_main};
use stark252::FieldElement;

const FE_A: FieldElement = FieldElement::from_hex_vartime(
    "01ef15c18599971b7beced415a40f0c7deacfd9b0d1819e03d723d8bc943cfca",
);
const FE_B: FieldElement = FieldElement::from_hex_vartime(
    "005668060aa49730b7be4801df46ec62de53ecd11abe43a32873000c36e8dc1f",
);

primefield::bench_field!(bench_field_element, "FieldElement", FE_A, FE_B);
criterion_group!(benches, bench_field_element);
criterion_main!(benches);
