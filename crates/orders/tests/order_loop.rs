use std::io::Cursor;

use pizzeria_orders::{
    CreationStrategy, FailureReason, LineTokens, LoopConfig, OrderLoop, OrderOutcome,
    StrategyKind, Termination,
};
use pizzeria_products::{Region, Stage};

fn success(label: &str) -> OrderOutcome {
    OrderOutcome::Success {
        label: label.to_string(),
        stage: Stage::Boxed,
    }
}

fn every_strategy(region: Region) -> Vec<Box<dyn CreationStrategy>> {
    vec![
        StrategyKind::Direct.build(Some(region)).unwrap(),
        StrategyKind::FactoryMethod.build(Some(region)).unwrap(),
        StrategyKind::AbstractFactory.build(Some(region)).unwrap(),
    ]
}

#[test]
fn beijing_orders_until_stop() {
    for strategy in every_strategy(Region::Beijing) {
        let name = strategy.name();
        let summary = OrderLoop::new(strategy).run(["cheese", "pepper", "stop"]);

        let outcomes: Vec<_> = summary.results.iter().map(|r| r.outcome.clone()).collect();
        assert_eq!(
            outcomes,
            vec![success("cheese/Beijing"), success("pepper/Beijing")],
            "strategy {name}"
        );
        assert_eq!(summary.termination, Termination::StopToken);
        assert!(summary.results.iter().all(|r| r.region == Some(Region::Beijing)));
    }
}

#[test]
fn unknown_token_between_good_orders() {
    for strategy in every_strategy(Region::London) {
        let summary = OrderLoop::new(strategy).run(["cheese", "bogus", "pepper"]);

        assert_eq!(summary.termination, Termination::Exhausted);
        assert_eq!(summary.successes(), 2);
        let reasons: Vec<_> = summary
            .results
            .iter()
            .filter_map(|r| r.outcome.failure_reason())
            .collect();
        assert_eq!(reasons, vec![FailureReason::UnknownToken]);
    }
}

#[test]
fn line_input_drives_the_loop() {
    let input = Cursor::new("cheese\ngreek\nbogus\n\npepper\n");
    let strategy = StrategyKind::Direct.build(Some(Region::Classic)).unwrap();
    let mut prompts = Vec::new();

    let summary = OrderLoop::new(strategy).run(LineTokens::with_prompt(
        input,
        &mut prompts,
        "input pizza type: ",
    ));

    assert_eq!(summary.termination, Termination::StopToken);
    let outcomes: Vec<_> = summary.results.iter().map(|r| r.outcome.clone()).collect();
    assert_eq!(outcomes[0], success("cheese/Classic"));
    assert_eq!(outcomes[1], success("greek/Classic"));
    assert_eq!(outcomes[2].failure_reason(), Some(FailureReason::UnknownToken));
    assert_eq!(outcomes.len(), 3);
    assert_eq!(
        String::from_utf8(prompts).unwrap().matches("input pizza type: ").count(),
        4
    );
}

#[test]
fn unset_family_fails_every_order_until_the_limit() {
    let strategy = StrategyKind::AbstractFactory.build(None).unwrap();
    let config = LoopConfig::default().with_max_consecutive_failures(Some(3));
    let summary =
        OrderLoop::with_config(strategy, config).run(["cheese", "pepper", "cheese", "pepper"]);

    assert_eq!(summary.termination, Termination::TooManyFailures);
    assert_eq!(summary.results.len(), 3);
    assert!(summary.results.iter().all(|r| {
        r.outcome.failure_reason() == Some(FailureReason::NoCatalogConfigured)
    }));
}

#[test]
fn results_serialize_for_reporting() {
    let strategy = StrategyKind::Direct.build(Some(Region::London)).unwrap();
    let summary = OrderLoop::new(strategy).run(["pepper"]);

    let json = serde_json::to_value(&summary.results[0]).unwrap();
    assert_eq!(json["token"], "pepper");
    assert_eq!(json["region"], "London");
    assert_eq!(json["outcome"]["status"], "success");
    assert_eq!(json["outcome"]["label"], "pepper/London");
    assert_eq!(json["outcome"]["stage"], "Boxed");
    assert!(json["order_id"].is_string());
}

#[test]
fn every_region_is_served_by_every_strategy() {
    for region in Region::ALL {
        let labels: Vec<Vec<OrderOutcome>> = every_strategy(region)
            .into_iter()
            .map(|strategy| {
                OrderLoop::new(strategy)
                    .run(["cheese", "greek", "pepper"])
                    .results
                    .into_iter()
                    .map(|r| r.outcome)
                    .collect()
            })
            .collect();

        assert_eq!(labels[0][0], success(&format!("cheese/{region}")));
        assert!(labels.iter().all(|outcomes| outcomes == &labels[0]), "region {region}");
    }
}

#[test]
fn garbled_line_fails_alone_and_orders_continue() {
    let strategy = StrategyKind::Direct.build(Some(Region::Beijing)).unwrap();
    let input: &[u8] = b"cheese\n\xff\xfe\npepper\n";

    let summary = OrderLoop::new(strategy).run(LineTokens::new(input));

    assert_eq!(summary.termination, Termination::Exhausted);
    assert_eq!(summary.results.len(), 3);
    assert_eq!(summary.successes(), 2);
    assert_eq!(
        summary.results[1].outcome.failure_reason(),
        Some(FailureReason::UnknownToken)
    );
}
