use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("gpon-provision"))
}

#[test]
fn raisecom_v2_acs_renders_the_create_line() {
    cmd()
        .args([
            "render",
            "--vendor",
            "raisecom",
            "--op",
            "config-v2-acs",
            "--sn",
            "RCMG3A8848C4",
            "--slot",
            "1",
            "--port",
            "4",
            "--ont-id",
            "21",
            "--line-profile",
            "NEWAP1.2917.ACS",
            "--sid",
            "123456789",
            "--name",
            "Nama Pelanggan",
            "--password",
            "20260121",
            "--vlan",
            "2917",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "create gpon-onu 21 sn RCMG3A8848C4 line-profile-id NEWAP1.2917.ACS service-profile-id 1",
        ))
        .stdout(predicate::str::contains("iphost 1 vlan 2917"));
}

#[test]
fn unknown_operation_fails_loudly() {
    cmd()
        .args(["render", "--vendor", "raisecom", "--op", "frobnicate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "unknown operation 'frobnicate' for vendor raisecom",
        ));
}

#[test]
fn missing_field_is_named_in_the_error() {
    cmd()
        .args([
            "render",
            "--vendor",
            "huawei",
            "--op",
            "check-optical",
            "--frame",
            "0",
            "--slot",
            "1",
            "--port",
            "4",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required field 'ont-id'"));
}

#[test]
fn zte_c610_variant_is_selected_by_olt_type() {
    cmd()
        .args([
            "render",
            "--vendor",
            "zte",
            "--op",
            "config-v1",
            "--sn",
            "ZTEGD1D8A9C8",
            "--frame",
            "1",
            "--slot",
            "2",
            "--port",
            "3",
            "--ont-id",
            "9",
            "--sid",
            "123456789",
            "--name",
            "Nama",
            "--password",
            "20260121",
            "--vlan",
            "2917",
            "--olt-type",
            "c610",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("onu 9 type ZTEG-F609 sn ZTEGD1D8A9C8"));
}
