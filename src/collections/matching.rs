use serde_json::{json, Value};

use super::activity;
use crate::domain::{Activity, ActivityType};

const KIND: ActivityType = ActivityType::Matching;

fn pairs(instructions: &str, left_label: &str, right_label: &str, items: &[(&str, &str)]) -> Value {
  let pairs: Vec<Value> = items
    .iter()
    .map(|(left, right)| json!({ "left": left, "right": right }))
    .collect();
  json!({
    "instructions": instructions,
    "leftLabel": left_label,
    "rightLabel": right_label,
    "pairs": pairs,
  })
}

fn settings(time_limit_secs: u32) -> Value {
  json!({ "timeLimit": time_limit_secs, "allowRetry": true, "shufflePairs": true, "showFeedback": true })
}

pub fn activities() -> Vec<Activity> {
  vec![
    Activity {
      content: pairs("Draw a line from each value to its type.", "Value", "Type", &[
        ("7", "int"), ("7.0", "float"), ("\"7\"", "str"), ("True", "bool"), ("None", "NoneType"),
        ("[7]", "list"), ("(7,)", "tuple"), ("{7}", "set"), ("{\"n\": 7}", "dict"),
      ]),
      settings: settings(240),
      ..activity(KIND, 1, 1, "Match Python Values to Their Types",
        "Learn to identify Python's built-in types by matching literal values with the type they create.",
        &["python", "matching", "data-types", "beginner"])
    },
    Activity {
      content: pairs("Match each expression with its result.", "Expression", "Result", &[
        ("9 // 2", "4"), ("9 % 2", "1"), ("9 / 2", "4.5"), ("2 ** 4", "16"), ("-9 // 2", "-5"),
        ("abs(-3)", "3"), ("round(4.5)", "4"), ("divmod(9, 4)", "(2, 1)"),
      ]),
      settings: settings(240),
      ..activity(KIND, 2, 1, "Python Arithmetic Results Matching",
        "Practice integer division, modulo, powers and rounding by matching expressions to results.",
        &["python", "matching", "arithmetic", "operators", "beginner"])
    },
    Activity {
      content: pairs("Match each string expression to its output for s = \"Python\".", "Expression", "Output", &[
        ("s[0]", "\"P\""), ("s[-2]", "\"o\""), ("s[2:]", "\"thon\""), ("s[:2]", "\"Py\""), ("s.lower()", "\"python\""),
        ("len(s)", "6"), ("s.find(\"h\")", "3"), ("s * 2", "\"PythonPython\""),
      ]),
      settings: settings(240),
      ..activity(KIND, 3, 1, "String Slicing Matching Essentials",
        "Understand string indexing and slicing by pairing expressions with the text they produce.",
        &["python", "matching", "strings", "beginner", "fundamentals"])
    },
    Activity {
      content: pairs("Match each concept to its definition.", "Concept", "Definition", &[
        ("Parameter", "Name in a function definition"), ("Argument", "Value passed in a call"), ("Return value", "Result sent back to the caller"),
        ("Default value", "Used when an argument is omitted"), ("Keyword argument", "Passed as name=value"), ("Docstring", "String documenting a function"),
        ("Recursion", "A function calling itself"), ("Side effect", "A change visible outside the function"),
      ]),
      settings: settings(300),
      ..activity(KIND, 4, 2, "Python Function Vocabulary Matching",
        "Learn the vocabulary of functions by matching each term with its meaning.",
        &["python", "matching", "functions", "vocabulary", "intermediate"])
    },
    Activity {
      content: pairs("Match each loop to the values it prints.", "Loop", "Printed values", &[
        ("for i in range(3): print(i)", "0 1 2"), ("for i in range(1, 4): print(i)", "1 2 3"), ("for i in range(0, 6, 2): print(i)", "0 2 4"),
        ("for i in range(3, 0, -1): print(i)", "3 2 1"), ("for c in \"ab\": print(c)", "a b"), ("for i, c in enumerate(\"xy\"): print(i)", "0 1"),
        ("for k in {\"a\": 1}: print(k)", "a"), ("for x in []: print(x)", "(nothing)"),
      ]),
      settings: settings(300),
      ..activity(KIND, 5, 2, "Loop Output Matching Challenge",
        "Practice tracing for loops over ranges, strings and dictionaries by matching loops with their output.",
        &["python", "matching", "loops", "intermediate"])
    },
    Activity {
      content: pairs("Match each task with the best collection type.", "Task", "Collection", &[
        ("Keep items in order and change them", "list"), ("Fixed record of values", "tuple"), ("Fast membership without duplicates", "set"),
        ("Look up a value by key", "dict"), ("Count occurrences", "collections.Counter"), ("Queue with fast pops at both ends", "collections.deque"),
        ("Dict with a default for missing keys", "collections.defaultdict"), ("Immutable set usable as a key", "frozenset"),
      ]),
      settings: settings(300),
      ..activity(KIND, 6, 2, "Choosing the Right Python Data Structure",
        "Understand the strengths of each collection by matching programming tasks to the right data structure.",
        &["python", "matching", "data-structures", "intermediate", "problem-solving"])
    },
    Activity {
      content: pairs("Match each module function with what it does.", "Function", "Purpose", &[
        ("math.sqrt", "Square root"), ("random.choice", "Pick a random element"), ("os.path.join", "Build a file path"),
        ("json.dumps", "Serialize to a JSON string"), ("json.loads", "Parse a JSON string"), ("datetime.date.today", "Current date"),
        ("time.sleep", "Pause execution"), ("sys.exit", "Exit the interpreter"),
      ]),
      settings: settings(360),
      ..activity(KIND, 7, 3, "Standard Library Functions Matching",
        "Explore commonly used modules by matching each function with its purpose.",
        &["python", "matching", "modules", "standard-library", "advanced"])
    },
    Activity {
      content: pairs("Match each OOP term with its description.", "Term", "Description", &[
        ("Class", "Blueprint for objects"), ("Instance", "An object built from a class"), ("Attribute", "Data stored on an object"),
        ("Method", "Function defined in a class"), ("Inheritance", "Reusing a parent class"), ("Encapsulation", "Hiding internal state"),
        ("Polymorphism", "Same interface, different behavior"), ("Composition", "Building objects from other objects"),
      ]),
      settings: settings(360),
      ..activity(KIND, 8, 3, "Object-Oriented Programming Concepts Matching",
        "Learn the core ideas of object-oriented design by matching each term with a clear description.",
        &["python", "matching", "oop", "classes", "advanced"])
    },
    Activity {
      content: pairs("Match each algorithm with its typical time complexity.", "Algorithm", "Complexity", &[
        ("Binary search", "O(log n)"), ("Linear search", "O(n)"), ("Merge sort", "O(n log n)"), ("Bubble sort", "O(n^2)"),
        ("Hash table lookup", "O(1)"), ("Naive Fibonacci recursion", "O(2^n)"), ("Breadth-first search", "O(V + E)"), ("Insertion sort on sorted input", "O(n)"),
      ]),
      settings: settings(420),
      ..activity(KIND, 9, 4, "Algorithm Complexity Matching Mastery",
        "Master the cost of classic algorithms by matching each with its time complexity.",
        &["python", "matching", "algorithms", "complexity", "expert"])
    },
    Activity {
      content: pairs("Match each idiom with what it expresses.", "Idiom", "Meaning", &[
        ("with open(p) as f:", "Guaranteed cleanup"), ("if __name__ == \"__main__\":", "Run only as a script"), ("a, b = b, a", "Swap values"),
        ("[*xs, *ys]", "Merge iterables into a list"), ("{**d1, **d2}", "Merge dictionaries"), ("x if cond else y", "Conditional expression"),
        ("any(pred(x) for x in xs)", "At least one matches"), ("sorted(xs, key=len)", "Sort by a computed key"),
      ]),
      settings: settings(420),
      ..activity(KIND, 10, 4, "The Ultimate Pythonic Idioms Matching Game",
        "Understand idiomatic Python by matching concise idioms with the intent they express.",
        &["python", "matching", "idioms", "best-practices", "expert"])
    },
  ]
}
