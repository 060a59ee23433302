//! BDD step definitions for building inbound envelopes

use cucumber::gherkin::Step;
use cucumber::given;

use alarm_relay::SnsEvent;

use crate::world::RelayWorld;

fn envelope(messages: &[String]) -> String {
    let records: Vec<serde_json::Value> = messages
        .iter()
        .map(|message| serde_json::json!({ "EventSource": "aws:sns", "Sns": { "Message": message } }))
        .collect();
    serde_json::json!({ "Records": records }).to_string()
}

#[given(expr = "an SNS event with alarm {string} in state {string} because {string}")]
fn alarm_event(world: &mut RelayWorld, name: String, state: String, reason: String) {
    let message = serde_json::json!({
        "AlarmName": name,
        "NewStateValue": state,
        "NewStateReason": reason,
    })
    .to_string();
    world.event = Some(envelope(&[message]));
}

#[given("an SNS event with message:")]
fn event_with_message(world: &mut RelayWorld, step: &Step) {
    let message = step.docstring.as_deref().expect("docstring required").trim();
    world.event = Some(envelope(&[message.to_string()]));
}

#[given(expr = "an SNS event with alarms {string} and {string}")]
fn two_alarm_event(world: &mut RelayWorld, first: String, second: String) {
    let messages = [first, second].map(|name| serde_json::json!({ "AlarmName": name }).to_string());
    world.event = Some(envelope(&messages));
}

#[given("an SNS event with no records")]
fn empty_event(world: &mut RelayWorld) {
    world.event = Some(serde_json::to_string(&SnsEvent::default()).unwrap());
}
