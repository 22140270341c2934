use courier_domain::constants::{CREATE, DISCRIMINATOR_FIELD, ENV_PREFIX, NOTIFY, REPORT};

#[test]
fn constants_match_capability_strings() {
    assert_eq!(NOTIFY, "notify");
    assert_eq!(CREATE, "create");
    assert_eq!(REPORT, "report");
    assert_eq!(DISCRIMINATOR_FIELD, "kind");
    assert_eq!(ENV_PREFIX, "COURIER");
}
