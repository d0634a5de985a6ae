use serde_json::{json, Value};

use super::activity;
use crate::domain::{Activity, ActivityType};

const KIND: ActivityType = ActivityType::DragDrop;

/// Build the content object from `(text, category)` pairs.
fn board(instructions: &str, categories: &[&str], items: &[(&str, &str)]) -> Value {
  let items: Vec<Value> = items
    .iter()
    .enumerate()
    .map(|(i, (text, category))| json!({ "id": format!("item-{}", i + 1), "text": text, "category": category }))
    .collect();
  json!({
    "instructions": instructions,
    "categories": categories,
    "items": items,
  })
}

fn settings() -> Value {
  json!({ "allowRetry": true, "showFeedback": true, "shuffleItems": true, "timeLimit": null })
}

pub fn activities() -> Vec<Activity> {
  vec![
    Activity {
      content: board(
        "Drag every literal into the box for its type.",
        &["int", "float", "str", "bool"],
        &[("42", "int"), ("-7", "int"), ("0", "int"), ("3.14", "float"), ("2e3", "float"), ("\"hello\"", "str"),
          ("'42'", "str"), ("\"\"", "str"), ("True", "bool"), ("False", "bool"), ("1.0", "float")],
      ),
      settings: settings(),
      ..activity(KIND, 1, 1, "Sort Python Values by Data Type",
        "Learn to recognize Python's basic types at a glance by sorting literals into int, float, str and bool.",
        &["python", "drag-drop", "data-types", "beginner"])
    },
    Activity {
      content: board(
        "Place each operator under the family it belongs to.",
        &["Arithmetic", "Comparison", "Logical", "Assignment"],
        &[("+", "Arithmetic"), ("//", "Arithmetic"), ("%", "Arithmetic"), ("**", "Arithmetic"), ("==", "Comparison"),
          ("!=", "Comparison"), ("<=", "Comparison"), ("and", "Logical"), ("not", "Logical"), ("or", "Logical"),
          ("+=", "Assignment"), ("=", "Assignment")],
      ),
      settings: settings(),
      ..activity(KIND, 2, 1, "Python Operators Sorting Challenge",
        "Practice telling arithmetic, comparison, logical and assignment operators apart.",
        &["python", "drag-drop", "operators", "beginner"])
    },
    Activity {
      content: board(
        "Decide whether each value is truthy or falsy, or whether the expression is not a value at all.",
        &["Truthy", "Falsy", "Raises an error", "Depends on content"],
        &[("0", "Falsy"), ("\"\"", "Falsy"), ("[]", "Falsy"), ("None", "Falsy"), ("\"0\"", "Truthy"), ("[0]", "Truthy"),
          ("-1", "Truthy"), ("1 / 0", "Raises an error"), ("int(\"x\")", "Raises an error"), ("some_list", "Depends on content"),
          ("user_input", "Depends on content")],
      ),
      settings: settings(),
      ..activity(KIND, 3, 1, "Truthy or Falsy? Essential Boolean Rules",
        "Understand how Python treats values in a boolean context by sorting them into truthy and falsy groups.",
        &["python", "drag-drop", "booleans", "beginner", "fundamentals"])
    },
    Activity {
      content: board(
        "Sort each method by the type it belongs to.",
        &["list", "str", "dict", "set"],
        &[("append", "list"), ("extend", "list"), ("sort", "list"), ("upper", "str"), ("split", "str"), ("join", "str"),
          ("keys", "dict"), ("items", "dict"), ("setdefault", "dict"), ("add", "set"), ("union", "set"), ("discard", "set")],
      ),
      settings: settings(),
      ..activity(KIND, 4, 2, "Match Methods to Python Collection Types",
        "Explore the methods of list, str, dict and set. Learn which type offers which operation.",
        &["python", "drag-drop", "methods", "collections", "intermediate"])
    },
    Activity {
      content: board(
        "Classify each type as mutable or immutable, and each container as ordered or not.",
        &["Mutable", "Immutable", "Ordered sequence", "Unordered collection"],
        &[("list", "Mutable"), ("dict", "Mutable"), ("bytearray", "Mutable"), ("tuple", "Immutable"), ("str", "Immutable"),
          ("frozenset", "Immutable"), ("int", "Immutable"), ("range", "Ordered sequence"), ("bytes", "Ordered sequence"),
          ("set", "Unordered collection"), ("dict.keys() view", "Unordered collection")],
      ),
      settings: settings(),
      ..activity(KIND, 5, 2, "Mutable vs Immutable Types in Python",
        "Understand which objects can change in place. Practice sorting built-in types by mutability and ordering.",
        &["python", "drag-drop", "mutability", "intermediate", "core"])
    },
    Activity {
      content: board(
        "Drag each statement to the control-flow construct it belongs to.",
        &["Conditional", "Loop", "Loop control", "Exception handling"],
        &[("if", "Conditional"), ("elif", "Conditional"), ("else", "Conditional"), ("match", "Conditional"), ("for", "Loop"),
          ("while", "Loop"), ("break", "Loop control"), ("continue", "Loop control"), ("try", "Exception handling"),
          ("except", "Exception handling"), ("finally", "Exception handling")],
      ),
      settings: settings(),
      ..activity(KIND, 6, 2, "Control Flow Keywords Sorter",
        "Learn the role of every control-flow keyword by grouping conditionals, loops and exception handling.",
        &["python", "drag-drop", "control-flow", "intermediate"])
    },
    Activity {
      content: board(
        "Put each name in the scope where it is defined in the code sample.",
        &["Local", "Enclosing", "Global", "Built-in"],
        &[("count inside inner()", "Local"), ("total inside inner()", "Local"), ("factor in outer()", "Enclosing"),
          ("prefix in outer()", "Enclosing"), ("CONFIG at module level", "Global"), ("logger at module level", "Global"),
          ("len", "Built-in"), ("print", "Built-in"), ("range", "Built-in"), ("helper defined at module level", "Global")],
      ),
      settings: json!({ "allowRetry": true, "showFeedback": true, "shuffleItems": true, "showCodeSample": true }),
      ..activity(KIND, 7, 3, "Python Scope Resolution: The LEGB Rule",
        "Master the LEGB lookup order by placing names in local, enclosing, global and built-in scopes.",
        &["python", "drag-drop", "scope", "functions", "advanced"])
    },
    Activity {
      content: board(
        "Sort each operation by its average time complexity.",
        &["O(1)", "O(log n)", "O(n)", "O(n log n)"],
        &[("dict lookup", "O(1)"), ("list append", "O(1)"), ("set membership", "O(1)"), ("bisect on sorted list", "O(log n)"),
          ("heapq.heappush", "O(log n)"), ("list membership", "O(n)"), ("list.insert(0, x)", "O(n)"), ("str.join", "O(n)"),
          ("sorted(list)", "O(n log n)"), ("list.sort()", "O(n log n)")],
      ),
      settings: settings(),
      ..activity(KIND, 8, 3, "Big-O Complexity of Common Python Operations",
        "Understand the cost of everyday operations on lists, dicts and sets by sorting them into complexity classes.",
        &["python", "drag-drop", "complexity", "algorithms", "advanced", "problem-solving"])
    },
    Activity {
      content: board(
        "Match each exception to the situation that raises it.",
        &["TypeError", "ValueError", "KeyError", "IndexError", "AttributeError"],
        &[("\"a\" + 1", "TypeError"), ("len(5)", "TypeError"), ("int(\"abc\")", "ValueError"), ("math.sqrt(-1)", "ValueError"),
          ("{}[\"k\"]", "KeyError"), ("os.environ[\"MISSING\"]", "KeyError"), ("[][0]", "IndexError"), ("\"abc\"[10]", "IndexError"),
          ("None.upper()", "AttributeError"), ("(1).append(2)", "AttributeError")],
      ),
      settings: settings(),
      ..activity(KIND, 9, 4, "Ultimate Python Exception Classification",
        "Learn to predict which built-in exception a faulty line raises and why.",
        &["python", "drag-drop", "exceptions", "expert"])
    },
    Activity {
      content: board(
        "Sort dunder methods by the protocol they implement.",
        &["Representation", "Comparison", "Container", "Context manager"],
        &[("__str__", "Representation"), ("__repr__", "Representation"), ("__format__", "Representation"), ("__eq__", "Comparison"),
          ("__lt__", "Comparison"), ("__hash__", "Comparison"), ("__len__", "Container"), ("__getitem__", "Container"),
          ("__contains__", "Container"), ("__iter__", "Container"), ("__enter__", "Context manager"), ("__exit__", "Context manager")],
      ),
      settings: settings(),
      ..activity(KIND, 10, 4, "Mastering Python Special Methods and Protocols",
        "Explore the data model: understand which special methods make objects printable, comparable, iterable and usable in with blocks.",
        &["python", "drag-drop", "oop", "dunder-methods", "expert"])
    },
  ]
}
