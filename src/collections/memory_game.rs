use serde_json::{json, Value};

use super::activity;
use crate::domain::{Activity, ActivityType};

const KIND: ActivityType = ActivityType::MemoryGame;

fn deck(instructions: &str, cards: &[(&str, &str)]) -> Value {
  let cards: Vec<Value> = cards
    .iter()
    .enumerate()
    .map(|(i, (front, back))| json!({ "id": i + 1, "front": front, "back": back }))
    .collect();
  json!({ "instructions": instructions, "cards": cards })
}

fn settings(grid: &str, flip_delay_ms: u32) -> Value {
  json!({ "gridSize": grid, "flipDelayMs": flip_delay_ms, "allowRetry": true, "showMoves": true, "timeLimit": null })
}

pub fn activities() -> Vec<Activity> {
  vec![
    Activity {
      content: deck("Flip two cards at a time and match each keyword with its meaning.", &[
        ("def", "Defines a function"), ("return", "Sends a value back to the caller"), ("if", "Runs code when a condition is true"),
        ("for", "Iterates over a sequence"), ("while", "Repeats while a condition holds"), ("import", "Loads a module"),
        ("class", "Defines a new type"), ("pass", "Does nothing, a placeholder"),
      ]),
      settings: settings("4x4", 900),
      ..activity(KIND, 1, 1, "Python Keywords Memory Match",
        "Learn the meaning of Python's most common keywords by pairing each one with its definition.",
        &["python", "memory-game", "keywords", "beginner"])
    },
    Activity {
      content: deck("Match every built-in function with what it returns.", &[
        ("len(\"abc\")", "3"), ("type(1.5)", "<class 'float'>"), ("abs(-4)", "4"), ("max([2, 9, 4])", "9"),
        ("round(2.567, 1)", "2.6"), ("str(10)", "\"10\""), ("bool(\"\")", "False"), ("min(\"cab\")", "\"a\""),
      ]),
      settings: settings("4x4", 900),
      ..activity(KIND, 2, 1, "Built-in Functions Flashcard Match",
        "Practice reading built-in function calls and remembering their results.",
        &["python", "memory-game", "built-ins", "beginner", "fundamentals"])
    },
    Activity {
      content: deck("Pair each escape sequence or format code with what it produces.", &[
        ("\\n", "Newline"), ("\\t", "Tab"), ("\\\\", "Backslash"), ("\\\"", "Double quote"),
        ("{:.2f}", "Two decimal places"), ("{:>8}", "Right-align in 8 columns"), ("{:,}", "Thousands separator"), ("{!r}", "repr() of the value"),
      ]),
      settings: settings("4x4", 800),
      ..activity(KIND, 3, 1, "String Escapes and Formatting Memory Game",
        "Understand escape sequences and f-string format specifiers through a quick matching game.",
        &["python", "memory", "strings", "formatting", "beginner"])
    },
    Activity {
      content: deck("Match each list method with its effect.", &[
        ("append(x)", "Add x at the end"), ("extend(it)", "Add every item of it"), ("insert(i, x)", "Put x before index i"),
        ("remove(x)", "Delete the first x"), ("pop()", "Remove and return the last item"), ("index(x)", "Position of the first x"),
        ("count(x)", "How many times x occurs"), ("reverse()", "Reverse in place"), ("clear()", "Remove every item"),
      ]),
      settings: settings("6x3", 800),
      ..activity(KIND, 4, 2, "Python List Methods Memory Challenge",
        "Master the list API by matching every method with the change it makes.",
        &["python", "memory-game", "lists", "methods", "intermediate"])
    },
    Activity {
      content: deck("Match each dictionary operation with its result for d = {\"a\": 1, \"b\": 2}.", &[
        ("d[\"a\"]", "1"), ("d.get(\"z\", 0)", "0"), ("list(d)", "[\"a\", \"b\"]"), ("len(d)", "2"),
        ("\"b\" in d", "True"), ("d.pop(\"a\")", "1, and removes the key"), ("list(d.values())", "[1, 2]"), ("d | {\"c\": 3}", "A new dict with three keys"),
      ]),
      settings: settings("4x4", 800),
      ..activity(KIND, 5, 2, "Dictionary Operations Memory Game",
        "Practice dictionary lookups, membership tests and merges by matching expressions to their results.",
        &["python", "memory-game", "dictionaries", "intermediate"])
    },
    Activity {
      content: deck("Match each comprehension with the value it builds.", &[
        ("[x * 2 for x in range(3)]", "[0, 2, 4]"), ("[x for x in range(6) if x % 2]", "[1, 3, 5]"), ("{x % 3 for x in range(6)}", "{0, 1, 2}"),
        ("{c: ord(c) for c in \"ab\"}", "{\"a\": 97, \"b\": 98}"), ("[c.upper() for c in \"hi\"]", "[\"H\", \"I\"]"),
        ("sum(x for x in range(5))", "10"), ("[len(w) for w in [\"to\", \"be\"]]", "[2, 2]"), ("[(i, j) for i in range(2) for j in range(1)]", "[(0, 0), (1, 0)]"),
      ]),
      settings: settings("4x4", 1000),
      ..activity(KIND, 6, 2, "Comprehensions Memory Match",
        "Learn to read list, set and dict comprehensions quickly by pairing each with its output.",
        &["python", "memory-game", "comprehensions", "intermediate"])
    },
    Activity {
      content: deck("Match each exception with the code that raises it.", &[
        ("ZeroDivisionError", "10 / 0"), ("NameError", "print(undefined_name)"), ("TypeError", "\"1\" + 1"), ("ValueError", "int(\"one\")"),
        ("KeyError", "{}[\"missing\"]"), ("IndexError", "[1, 2][5]"), ("AttributeError", "(5).append(1)"), ("StopIteration", "next(iter([]))"),
      ]),
      settings: settings("4x4", 1000),
      ..activity(KIND, 7, 3, "Python Exceptions Memory Challenge",
        "Understand common runtime errors by matching each exception type with a line that triggers it.",
        &["python", "memory-game", "exceptions", "debugging", "advanced"])
    },
    Activity {
      content: deck("Match each standard-library module with its purpose.", &[
        ("os", "Operating system interfaces"), ("sys", "Interpreter details and argv"), ("math", "Mathematical functions"),
        ("random", "Pseudo-random numbers"), ("datetime", "Dates and times"), ("json", "JSON encoding and decoding"),
        ("collections", "Specialized containers"), ("itertools", "Iterator building blocks"), ("pathlib", "Object-oriented file paths"),
      ]),
      settings: settings("6x3", 1000),
      ..activity(KIND, 8, 3, "Essential Standard Library Modules Memory Game",
        "Explore the modules you will import most often and remember what each one is for.",
        &["python", "memory-game", "modules", "standard-library", "advanced"])
    },
    Activity {
      content: deck("Match each special method with the syntax that calls it.", &[
        ("__init__", "Obj()"), ("__len__", "len(obj)"), ("__str__", "str(obj)"), ("__eq__", "a == b"),
        ("__getitem__", "obj[key]"), ("__iter__", "for x in obj"), ("__call__", "obj()"), ("__add__", "a + b"),
      ]),
      settings: settings("4x4", 1200),
      ..activity(KIND, 9, 4, "Mastering Python Dunder Methods Memory Match",
        "Master the data model by linking each special method to the syntax that triggers it.",
        &["python", "memory-game", "oop", "dunder-methods", "expert"])
    },
    Activity {
      content: deck("Match each decorator or generator concept with its description.", &[
        ("@staticmethod", "Method without self or cls"), ("@classmethod", "Method receiving the class"), ("@property", "Attribute-style getter"),
        ("@functools.lru_cache", "Memoizes results"), ("yield", "Produces a value and pauses"), ("yield from", "Delegates to a sub-generator"),
        ("@dataclass", "Generates __init__ and __repr__"), ("@functools.wraps", "Keeps the wrapped function's metadata"),
      ]),
      settings: settings("4x4", 1200),
      ..activity(KIND, 10, 4, "Ultimate Decorators and Generators Memory Challenge",
        "Learn the vocabulary of decorators and generators and understand what each one changes about a function.",
        &["python", "memory-game", "decorators", "generators", "expert"])
    },
  ]
}
