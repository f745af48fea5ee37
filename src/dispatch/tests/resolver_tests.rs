//! Tests for the hash-based area resolver.

use crate::dispatch::{
    adapters::area_hash::AreaHashResolver,
    ports::LocationResolver,
};
use crate::roster::domain::AreaLabel;
use eyre::ensure;
use rstest::rstest;

#[rstest]
#[case("ward-1")]
#[case("ward-17")]
#[case("Hudkeshwar")]
fn resolution_is_deterministic(#[case] label: &str) -> eyre::Result<()> {
    let area = AreaLabel::new(label)?;
    let first = AreaHashResolver::resolve_label(&area);
    let second = AreaHashResolver::resolve_label(&area);
    ensure!(first == second);
    Ok(())
}

#[rstest]
#[case("ward-1")]
#[case("ward-2")]
#[case("a very long area label with punctuation, spaces and ünïcödé")]
fn resolved_points_stay_on_the_placeholder_grid(#[case] label: &str) -> eyre::Result<()> {
    let point = AreaHashResolver::resolve_label(&AreaLabel::new(label)?);
    ensure!((20.0..21.0).contains(&point.lat));
    ensure!((77.0..78.0).contains(&point.lng));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn port_resolution_matches_the_synchronous_helper() -> eyre::Result<()> {
    let area = AreaLabel::new("ward-9")?;
    let resolver = AreaHashResolver::new();
    let via_port = resolver.resolve(&area).await?;
    ensure!(via_port == AreaHashResolver::resolve_label(&area));
    Ok(())
}
