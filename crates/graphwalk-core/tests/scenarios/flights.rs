//! Reachability over a flight network.

use graphwalk_core::{can_reach, reachable, Dedup, Reachability};

use crate::helpers::{flight_network, init_tracing, walkers};

const CODES: [&str; 4] = ["JFK", "LHR", "CDG", "LAX"];
const ROUTES: [(&str, &str); 4] = [
    ("JFK", "LHR"),
    ("LHR", "CDG"),
    ("CDG", "JFK"),
    ("LAX", "JFK"),
];

#[test]
fn test_no_path_from_jfk_to_lax() -> anyhow::Result<()> {
    init_tracing();
    let network = flight_network(&CODES, &ROUTES)?;
    let jfk = network.find("JFK");
    let lax = network.find("LAX");

    assert!(!can_reach(&network, jfk.as_ref(), lax.as_ref()));
    for walker in walkers(Dedup::Identity) {
        assert_eq!(
            walker.trace_reach(&network, jfk.as_ref(), lax.as_ref()),
            Reachability {
                reachable: false,
                visited: 3,
            }
        );
    }
    Ok(())
}

#[test]
fn test_lax_reaches_the_loop() -> anyhow::Result<()> {
    init_tracing();
    let network = flight_network(&CODES, &ROUTES)?;
    let lax = network.find("LAX");
    let cdg = network.find("CDG");

    for walker in walkers(Dedup::Identity) {
        let trace = walker.trace_reach(&network, lax.as_ref(), cdg.as_ref());
        assert!(trace.reachable);
        assert_eq!(trace.visited, 4);
    }
    Ok(())
}

#[test]
fn test_reachable_order_follows_routes() -> anyhow::Result<()> {
    init_tracing();
    let network = flight_network(&CODES, &ROUTES)?;

    let order: Vec<&str> = reachable(&network, network.find("LAX").as_ref())
        .into_iter()
        .map(|id| network[id].code())
        .collect();
    assert_eq!(order, ["LAX", "JFK", "LHR", "CDG"]);
    Ok(())
}

#[test]
fn test_unknown_code_is_absent_endpoint() -> anyhow::Result<()> {
    init_tracing();
    let network = flight_network(&CODES, &ROUTES)?;

    assert!(!can_reach(
        &network,
        network.find("JFK").as_ref(),
        network.find("SFO").as_ref()
    ));
    Ok(())
}
