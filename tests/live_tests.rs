use predicates::prelude::*;

#[test]
fn live_prints_requested_number_of_ticks() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("plantkpi");
    cmd.args(["live", "-p", "drying", "-t", "3", "--interval-ms", "10", "--seed", "5"]);

    let assert = cmd.assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let ticks = stdout
        .lines()
        .filter(|line| line.contains("Drying RUNNING") || line.contains("Drying STOPPED"))
        .count();
    assert_eq!(ticks, 3);
}

#[test]
fn zero_interval_is_rejected() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("plantkpi");
    cmd.args(["live", "-p", "washing", "--interval-ms", "0"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to start live feed"));
}

#[test]
fn unseeded_live_feed_streams_the_area() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("plantkpi");
    cmd.args(["live", "-p", "selection", "-t", "2", "--interval-ms", "5"]);

    let assert = cmd
        .assert()
        .success()
        .stdout(predicate::str::contains("Live feed for Selection every 5 ms"));
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let ticks = stdout
        .lines()
        .filter(|line| line.contains("Selection RUNNING") || line.contains("Selection STOPPED"))
        .count();
    assert_eq!(ticks, 2);
}
