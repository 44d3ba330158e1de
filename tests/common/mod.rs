use assert_cmd::Command;

pub fn lalp_cmd() -> Command {
    let mut cmd = Command::cargo_bin("lalp-tei").unwrap();
    cmd.env_remove("LALP_TEI_CONFIG");
    cmd.env_remove("LALP_TEI_LOG");
    cmd
}
