use courier_alarm::{AlarmError, Severity};
use courier_kernel::Assembler;
use courier_kernel::contracts::{RecipientError, async_trait};
use courier_kernel::domain::config::{AlarmConfig, CourierConfig};

fn config(dial_number: Option<&str>) -> AlarmConfig {
    AlarmConfig { siren: true, dial_number: dial_number.map(str::to_owned) }
}

#[tokio::test]
async fn trigger_reaches_every_responder() {
    let assembler = Assembler::new(CourierConfig::default());
    let mut assembly = assembler.begin().unwrap();
    let alarm = courier_alarm::init(&mut assembly, &config(Some("555-0100"))).unwrap();
    assembly.finish().unwrap();

    let report = alarm.trigger("vault", Severity::Critical).await.unwrap();

    assert_eq!(report.delivered, 2);
    assert_eq!(alarm.siren().map(|s| s.times_sounded()), Some(1));
    assert_eq!(alarm.dialer().map(|d| d.calls()), Some(1));
    assert_eq!(alarm.journal().lines(), vec!["critical alarm in vault"]);
    assert_eq!(alarm.sender().recipients().names(), vec!["responders", "journal"]);
}

#[tokio::test]
async fn trigger_before_assembly_is_refused() {
    let assembler = Assembler::new(CourierConfig::default());
    let mut assembly = assembler.begin().unwrap();
    let alarm = courier_alarm::init(&mut assembly, &config(None)).unwrap();

    let err = alarm.trigger("hall", Severity::Warning).await.unwrap_err();
    assert!(matches!(err, AlarmError::Send { .. }));
    assert!(alarm.journal().lines().is_empty());
}

#[tokio::test]
async fn lost_line_halts_before_the_journal() {
    let assembler = Assembler::new(CourierConfig::default());
    let mut assembly = assembler.begin().unwrap();
    let alarm = courier_alarm::init(&mut assembly, &config(Some("555-0100"))).unwrap();
    assembly.finish().unwrap();

    if let Some(dialer) = alarm.dialer() {
        dialer.set_line(false);
    }
    let err = alarm.trigger("vault", Severity::Critical).await.unwrap_err();

    assert!(err.to_string().contains("responders"));
    assert_eq!(alarm.siren().map(|s| s.times_sounded()), Some(1));
    assert!(alarm.journal().lines().is_empty());
}

#[derive(Debug)]
struct Pager;

#[async_trait]
impl courier_kernel::contracts::Recipient<courier_alarm::AlarmEvent> for Pager {
    async fn notify(&self, _event: &courier_alarm::AlarmEvent) -> Result<(), RecipientError> {
        Ok(())
    }
}

#[tokio::test]
async fn extra_recipients_can_be_registered_on_the_sender() {
    let assembler = Assembler::new(CourierConfig::default());
    let mut assembly = assembler.begin().unwrap();
    let alarm = courier_alarm::init(
        &mut assembly,
        &AlarmConfig { siren: false, dial_number: None },
    )
    .unwrap();
    assembly.finish().unwrap();

    assert_eq!(alarm.sender().register(std::sync::Arc::new(Pager)), 2);
    let report = alarm.trigger("lobby", Severity::Notice).await.unwrap();
    assert_eq!(report.delivered, 2);
}
