use assert_cmd::Command;
use predicates::str::contains;

const DATA: &str = "tests/data/electorate.toml";

fn cmd() -> Command {
    Command::cargo_bin("electorate").unwrap()
}

#[test]
fn cities_table_lists_largest_metro_first() {
    cmd()
        .args(["cities", DATA])
        .assert()
        .success()
        .stdout(contains("|Metro Region|Population|Total Population|Total Share|"))
        .stdout(contains("|New York|20,182,305|20,182,305|"));
}

#[test]
fn minority_win_table_starts_at_california() {
    // 39,144,818 / 2 + 1 = 19,572,410.
    cmd()
        .args(["minority-win", DATA])
        .assert()
        .success()
        .stdout(contains("|California|39,144,818|19,572,410|19,572,410|"))
        .stdout(contains("Minimum voters for an elector majority:"));
}

#[test]
fn minority_win_running_electors_reach_majority() {
    // The 11 most populous states carry 270 electors in this dataset.
    cmd()
        .args(["minority-win", DATA])
        .assert()
        .success()
        .stdout(contains("|New Jersey|"))
        .stdout(contains("|270|"));
}

#[test]
fn minority_win_json_emits_both_figures() {
    cmd()
        .args(["minority-win", DATA, "--json"])
        .assert()
        .success()
        .stdout(contains("\"winning\""))
        .stdout(contains("\"remaining\""));
}

#[test]
fn majority_loss_prints_the_composite() {
    cmd()
        .args(["majority-loss", DATA])
        .assert()
        .success()
        .stdout(contains("Votes behind an elector win without a popular majority:"));
}

#[test]
fn full_report_includes_both_tables() {
    cmd()
        .args(["report", DATA])
        .assert()
        .success()
        .stdout(contains("## Largest metro areas"))
        .stdout(contains("## Fewest states for an elector majority"))
        .stdout(contains("|State|Population|Majority|Total Voters|% of pop.|Electors|Total Electors|"));
}

#[test]
fn addresses_prints_one_frame_per_tick() {
    cmd()
        .args(["addresses", "--ticks", "2", "--interval-ms", "1"])
        .assert()
        .success()
        .stdout(contains("tick 1"))
        .stdout(contains("tick 2"))
        .stdout(contains("align 8"));
}

#[test]
fn missing_dataset_fails_with_an_error() {
    cmd()
        .args(["report", "tests/data/nope.toml"])
        .assert()
        .failure()
        .stderr(contains("Report failed"));
}
