use courier_contracts::{Recipient, RecipientError, async_trait};
use courier_registry::RecipientRegistry;
use proptest::prelude::*;
use std::borrow::Cow;
use std::sync::Arc;

#[derive(Debug)]
struct Tagged(String);

#[async_trait]
impl Recipient<()> for Tagged {
    fn name(&self) -> Cow<'static, str> {
        Cow::Owned(self.0.clone())
    }

    async fn notify(&self, _message: &()) -> Result<(), RecipientError> {
        Ok(())
    }
}

proptest! {
    #[test]
    fn snapshot_matches_registration_order(names in proptest::collection::vec("[a-z]{1,8}", 1..32)) {
        let registry = RecipientRegistry::<()>::many();
        for name in &names {
            registry.register(Arc::new(Tagged(name.clone())));
        }

        let registered: Vec<String> =
            registry.current_recipients().names().into_iter().map(Cow::into_owned).collect();
        prop_assert_eq!(registered, names);
    }

    #[test]
    fn single_policy_keeps_only_the_last(names in proptest::collection::vec("[a-z]{1,8}", 1..16)) {
        let registry = RecipientRegistry::<()>::single();
        for name in &names {
            prop_assert_eq!(registry.register(Arc::new(Tagged(name.clone()))), 1);
        }

        let last = names.last().cloned().unwrap_or_default();
        prop_assert_eq!(registry.current_recipients().names(), vec![Cow::<str>::Owned(last)]);
    }
}
