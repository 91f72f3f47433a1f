//! Scene documents shared by tests across the workspace.

/// One dialogue line followed by a two-option cut-in whose best choice is
/// `x` ("Yes"). No acceptable set, no follow-up.
pub const GREETING_SCENE_JSON: &str = r#"{
  "scene_id": "greeting",
  "duration_sec": 30,
  "topic": ["greetings"],
  "setting": "Office hallway",
  "speakers": [{"id": "A"}],
  "lines": [
    {"spk": "A", "text": "Hi"},
    {"event": "CUTIN_1"}
  ],
  "cutins": [
    {
      "id": "CUTIN_1",
      "prompt": "How do you respond?",
      "choices": [
        {"id": "x", "text": "Yes"},
        {"id": "y", "text": "No"}
      ],
      "best_choice_id": "x",
      "timer_sec": 5
    }
  ]
}"#;

/// A cafe ordering scene with two cut-ins, an acceptable set and hints.
pub const CAFE_SCENE_JSON: &str = r#"{
  "scene_id": "cafe_order",
  "duration_sec": 90,
  "topic": ["ordering", "small talk"],
  "setting": "A busy cafe counter",
  "speakers": [{"id": "barista"}, {"id": "learner"}],
  "lines": [
    {"spk": "barista", "text": "Hi there! What can I get you?"},
    {"spk": "learner", "text": "Hmm, let me see..."},
    {"event": "CUTIN_ORDER"},
    {"spk": "barista", "text": "Anything else?"},
    {"event": "CUTIN_EXTRA"},
    {"spk": "barista", "text": "That'll be four fifty."}
  ],
  "cutins": [
    {
      "id": "CUTIN_ORDER",
      "prompt": "The barista is waiting. What do you say?",
      "choices": [
        {"id": "a", "text": "A medium latte, please."},
        {"id": "b", "text": "Latte."},
        {"id": "c", "text": "Um... I don't know."}
      ],
      "best_choice_id": "a",
      "acceptable_choice_ids": ["b"],
      "timer_sec": 8,
      "follow_up": {"best_next_line_hint": "A medium latte to go, please."}
    },
    {
      "id": "CUTIN_EXTRA",
      "prompt": "Do you want anything else?",
      "choices": [
        {"id": "a", "text": "No, that's all. Thank you!"},
        {"id": "b", "text": "No."}
      ],
      "best_choice_id": "a",
      "timer_sec": 5,
      "follow_up": {"best_next_line_hint": "Add a thank-you to sound friendly."}
    }
  ]
}"#;

/// `CAFE_SCENE_JSON` written as YAML.
pub const CAFE_SCENE_YAML: &str = r#"scene_id: cafe_order
duration_sec: 90
topic:
  - ordering
  - small talk
setting: A busy cafe counter
speakers:
  - id: barista
  - id: learner
lines:
  - spk: barista
    text: "Hi there! What can I get you?"
  - spk: learner
    text: "Hmm, let me see..."
  - event: CUTIN_ORDER
  - spk: barista
    text: "Anything else?"
  - event: CUTIN_EXTRA
  - spk: barista
    text: "That'll be four fifty."
cutins:
  - id: CUTIN_ORDER
    prompt: "The barista is waiting. What do you say?"
    choices:
      - id: a
        text: "A medium latte, please."
      - id: b
        text: "Latte."
      - id: c
        text: "Um... I don't know."
    best_choice_id: a
    acceptable_choice_ids: [b]
    timer_sec: 8
    follow_up:
      best_next_line_hint: "A medium latte to go, please."
  - id: CUTIN_EXTRA
    prompt: "Do you want anything else?"
    choices:
      - id: a
        text: "No, that's all. Thank you!"
      - id: b
        text: "No."
    best_choice_id: a
    timer_sec: 5
    follow_up:
      best_next_line_hint: "Add a thank-you to sound friendly."
"#;

/// Dialogue only.
pub const NO_CUTIN_SCENE_JSON: &str = r#"{
  "scene_id": "smalltalk",
  "duration_sec": 20,
  "topic": ["weather", "weekend"],
  "setting": "Bus stop",
  "speakers": [{"id": "A"}, {"id": "B"}],
  "lines": [
    {"spk": "A", "text": "Nice weather today."},
    {"spk": "B", "text": "It really is. Any plans for the weekend?"}
  ],
  "cutins": []
}"#;

/// The second line triggers `CUTIN_MISSING`, which is not defined.
pub const DANGLING_CUTIN_SCENE_JSON: &str = r#"{
  "scene_id": "dangling",
  "duration_sec": 15,
  "topic": ["errors"],
  "setting": "Nowhere",
  "speakers": [{"id": "A"}],
  "lines": [
    {"spk": "A", "text": "Before the gap."},
    {"event": "CUTIN_MISSING"},
    {"spk": "A", "text": "After the gap."}
  ],
  "cutins": []
}"#;
