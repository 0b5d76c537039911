#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use crate::options::{prepare_for_render, PromptOption};
use crate::output::Console;
use crate::testing::{CaptureWriter, ScriptedReader};
use crate::time::ClockHandle;
use chrono::{TimeZone, Utc};
use menuline_replay::Routine;

fn no_input() -> ScriptedReader {
    ScriptedReader::eof_when_empty(Vec::<String>::new())
}

fn silent_terminal() -> ScriptedReader {
    ScriptedReader::block_when_empty(Vec::<String>::new())
}

fn at(secs: i64) -> chrono::DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).single().unwrap()
}

struct Fixture {
    ctx: DispatcherContext,
    console: CaptureWriter,
}

fn fixture(reader: ScriptedReader) -> Fixture {
    let console = CaptureWriter::new();
    let ctx = DispatcherContext::new()
        .with_clock(ClockHandle::fake_at_epoch())
        .with_console(Console::from_writer(Box::new(console.clone())))
        .with_reader(Arc::new(reader));
    Fixture { ctx, console }
}

fn delayed_routine(value: &str, delay_secs: i64) -> Routine {
    let record = menuline_replay::InputRecord::from_parts(
        value,
        at(100),
        Some(at(100 + delay_secs)),
        "",
    );
    Routine::from_records([record]).with_delays()
}

#[tokio::test]
async fn test_scripted_read_consumes_routine() {
    let f = fixture(no_input());
    f.ctx.install_routine(Routine::scripted(["2", "exit"], at(0)));

    let dispatcher = ReadDispatcher::new(&f.ctx);
    assert_eq!(
        dispatcher.read().await.unwrap(),
        ReadOutcome::Answer("2".to_string())
    );
    assert_eq!(
        dispatcher.read().await.unwrap(),
        ReadOutcome::Answer("exit".to_string())
    );
    assert!(!f.ctx.has_scripted_input());
}

#[tokio::test]
async fn test_scripted_read_echoes_value_in_color() {
    let f = fixture(no_input());
    f.ctx.install_routine(Routine::scripted(["2"], at(0)));

    ReadDispatcher::new(&f.ctx).read().await.unwrap();
    assert!(f.console.contents().contains("\x1b[38;2;97;175;239m2"));
}

#[tokio::test]
async fn test_scripted_read_echoes_description_first() {
    let f = fixture(no_input());
    let record =
        menuline_replay::InputRecord::scripted("1", at(0)).with_description("picks Alpha");
    f.ctx.install_routine(Routine::from_records([record]));

    ReadDispatcher::new(&f.ctx).read().await.unwrap();
    let plain = f.console.plain_contents();
    let narration = plain.find("picks Alpha").unwrap();
    let value = plain.rfind('1').unwrap();
    assert!(narration < value);
}

#[tokio::test]
async fn test_replayed_answer_is_recorded_with_description() {
    let f = fixture(no_input());
    let record = menuline_replay::InputRecord::scripted("1", at(0)).with_description("note");
    f.ctx.install_routine(Routine::from_records([record]));

    ReadDispatcher::new(&f.ctx).read().await.unwrap();
    let recorded = f.ctx.session().most_recent().unwrap();
    assert_eq!(recorded.value(), "1");
    assert_eq!(recorded.description(), "note");
}

#[tokio::test]
async fn test_delay_replay_sleeps_half_the_stored_delay() {
    let f = fixture(no_input());
    // Stored delay 3s; replayed at half speed = 1.5s on the fake clock.
    f.ctx.install_routine(delayed_routine("2", 3));

    ReadDispatcher::new(&f.ctx).read().await.unwrap();
    assert_eq!(f.ctx.clock().now_millis(), 1500);
}

#[tokio::test]
async fn test_delay_replay_is_capped() {
    let f = fixture(no_input());
    // Stored delay 60s would replay as 30s; the cap holds it to 2s.
    f.ctx.install_routine(delayed_routine("2", 60));

    ReadDispatcher::new(&f.ctx).read().await.unwrap();
    assert_eq!(
        f.ctx.clock().now_millis(),
        MAX_REPLAY_DELAY.as_millis() as u64
    );
}

#[tokio::test]
async fn test_delays_ignored_without_flag() {
    let f = fixture(no_input());
    let mut routine = delayed_routine("2", 3);
    routine.set_use_delays(false);
    f.ctx.install_routine(routine);

    ReadDispatcher::new(&f.ctx).read().await.unwrap();
    assert_eq!(f.ctx.clock().now_millis(), 0);
}

#[tokio::test]
async fn test_live_read_returns_typed_line() {
    let f = fixture(ScriptedReader::eof_when_empty(["hello"]));
    let outcome = ReadDispatcher::new(&f.ctx).read().await.unwrap();
    assert_eq!(outcome, ReadOutcome::Answer("hello".to_string()));
    assert_eq!(f.ctx.session().most_recent().unwrap().value(), "hello");
}

#[tokio::test]
async fn test_exhausted_routine_falls_through_to_terminal() {
    let f = fixture(ScriptedReader::eof_when_empty(["typed"]));
    f.ctx.install_routine(Routine::scripted(["scripted"], at(0)));

    let dispatcher = ReadDispatcher::new(&f.ctx);
    assert_eq!(
        dispatcher.read().await.unwrap(),
        ReadOutcome::Answer("scripted".to_string())
    );
    assert_eq!(
        dispatcher.read().await.unwrap(),
        ReadOutcome::Answer("typed".to_string())
    );
}

#[tokio::test]
async fn test_eof_surfaces_as_error() {
    let f = fixture(no_input());
    let err = ReadDispatcher::new(&f.ctx).read().await.unwrap_err();
    assert!(matches!(err, DispatchError::Eof));
}

#[tokio::test]
async fn test_precancelled_token_never_blocks() {
    // A blocking reader with no input would hang forever if touched.
    let f = fixture(silent_terminal());
    let token = CancelToken::new();
    token.cancel();

    let outcome = tokio::time::timeout(
        std::time::Duration::from_secs(1),
        ReadDispatcher::new(&f.ctx).read_with(&token),
    )
    .await
    .unwrap()
    .unwrap();
    assert!(outcome.is_canceled());
    assert!(f.ctx.session().is_empty());
}

#[tokio::test]
async fn test_cancel_during_blocking_read() {
    let f = fixture(silent_terminal());
    let token = CancelToken::new();
    let dispatcher = ReadDispatcher::new(&f.ctx);

    let pending = tokio::spawn({
        let token = token.clone();
        async move { dispatcher.read_with(&token).await }
    });
    tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    token.cancel();

    let outcome = tokio::time::timeout(std::time::Duration::from_secs(1), pending)
        .await
        .unwrap()
        .unwrap()
        .unwrap();
    assert!(outcome.is_canceled());
}

#[tokio::test]
async fn test_abandoned_read_is_discarded_not_replayed() {
    let reader = Arc::new(silent_terminal());
    let console = CaptureWriter::new();
    let ctx = DispatcherContext::new()
        .with_clock(ClockHandle::fake_at_epoch())
        .with_console(Console::from_writer(Box::new(console.clone())))
        .with_reader(Arc::clone(&reader) as Arc<dyn LineReader>);
    let dispatcher = ReadDispatcher::new(&ctx);

    // Abandon a read mid-flight.
    let token = CancelToken::new();
    let pending = tokio::spawn({
        let dispatcher = dispatcher.clone();
        let token = token.clone();
        async move { dispatcher.read_with(&token).await }
    });
    tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    token.cancel();
    assert!(pending.await.unwrap().unwrap().is_canceled());

    // The detached worker consumes this stray line and drops it.
    reader.push_line("stray");
    let deadline = std::time::Instant::now() + std::time::Duration::from_secs(2);
    while reader.pending() > 0 {
        assert!(std::time::Instant::now() < deadline, "stray line never consumed");
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    // A fresh read sees only fresh input.
    let next = tokio::spawn(async move { dispatcher.read().await });
    tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    reader.push_line("real");
    let outcome = tokio::time::timeout(std::time::Duration::from_secs(1), next)
        .await
        .unwrap()
        .unwrap()
        .unwrap();
    assert_eq!(outcome, ReadOutcome::Answer("real".to_string()));
}

#[tokio::test]
async fn test_registry_resolution_attaches_option() {
    let f = fixture(no_input());
    f.ctx.install_routine(Routine::scripted(["2"], at(0)));

    let mut options: Vec<PromptOption> = ["Alpha", "Beta", "Gamma"]
        .iter()
        .map(|label| PromptOption::new(*label))
        .collect();
    prepare_for_render(&mut options);
    f.ctx.registry().repopulate("Pick one", &options);

    ReadDispatcher::new(&f.ctx).read().await.unwrap();
    let record = f.ctx.session().most_recent().unwrap();
    let resolved = record.resolved_option().unwrap();
    assert_eq!(resolved.text, "Beta");
    assert_eq!(resolved.prompt_message, "Pick one");
}

#[tokio::test]
async fn test_resolution_is_not_reused_by_a_later_read() {
    let f = fixture(no_input());
    f.ctx.install_routine(Routine::scripted(["2", "2"], at(0)));

    let mut options: Vec<PromptOption> = ["Alpha", "Beta", "Gamma"]
        .iter()
        .map(|label| PromptOption::new(*label))
        .collect();
    prepare_for_render(&mut options);
    f.ctx.registry().repopulate("Pick one", &options);

    let dispatcher = ReadDispatcher::new(&f.ctx);
    dispatcher.read().await.unwrap();
    assert!(f
        .ctx
        .session()
        .most_recent()
        .unwrap()
        .resolved_option()
        .is_some());

    // A free-text answer that happens to look like an index stays plain.
    dispatcher.read().await.unwrap();
    assert!(f
        .ctx
        .session()
        .most_recent()
        .unwrap()
        .resolved_option()
        .is_none());
    assert!(f.ctx.registry().is_empty());
}

#[tokio::test]
async fn test_recording_disabled_keeps_session_empty() {
    let f = fixture(no_input());
    f.ctx.set_recording(false);
    f.ctx.install_routine(Routine::scripted(["1"], at(0)));

    ReadDispatcher::new(&f.ctx).read().await.unwrap();
    assert!(f.ctx.session().is_empty());
}

#[tokio::test]
async fn test_records_enter_session_in_request_order() {
    let f = fixture(ScriptedReader::eof_when_empty(["typed"]));
    f.ctx.install_routine(Routine::scripted(["a", "b"], at(0)));

    let dispatcher = ReadDispatcher::new(&f.ctx);
    dispatcher.read().await.unwrap();
    dispatcher.read().await.unwrap();
    dispatcher.read().await.unwrap();

    let values: Vec<String> = f
        .ctx
        .session()
        .chronological()
        .iter()
        .map(|r| r.value().to_string())
        .collect();
    assert_eq!(values, ["a", "b", "typed"]);
}
