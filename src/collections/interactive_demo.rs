use serde_json::{json, Value};

use super::activity;
use crate::domain::{Activity, ActivityType};

const KIND: ActivityType = ActivityType::InteractiveDemo;

fn step(title: &str, code: &str, explanation: &str) -> Value {
  json!({ "title": title, "code": code, "explanation": explanation })
}

fn demo(instructions: &str, steps: Vec<Value>) -> Value {
  json!({ "instructions": instructions, "steps": steps })
}

fn settings() -> Value {
  json!({ "autoPlay": false, "stepDelayMs": 1500, "allowEditing": true, "showOutput": true })
}

pub fn activities() -> Vec<Activity> {
  vec![
    Activity {
      content: demo("Step through the demo and run each snippet to see its output.", vec![
        step("Create a variable", "x = 10", "The name x now refers to the integer 10."),
        step("Rebind it", "x = \"ten\"", "Names are not typed; x now refers to a string."),
        step("Inspect the type", "type(x)", "type() reports <class 'str'>."),
        step("Two names, one object", "y = x", "y refers to the same string object."),
        step("Check identity", "x is y", "True, both names point to one object."),
      ]),
      settings: settings(),
      ..activity(KIND, 1, 1, "How Python Variables Really Work: Names and Objects",
        "Explore Python's name-binding model and learn why variables are labels attached to objects.",
        &["python", "interactive-demo", "variables", "beginner"])
    },
    Activity {
      content: demo("Run each print call and compare the output formatting.", vec![
        step("Plain print", "print(\"a\", \"b\")", "Arguments are separated by a space."),
        step("Custom separator", "print(\"a\", \"b\", sep=\"-\")", "sep changes the separator."),
        step("No newline", "print(\"a\", end=\"\")", "end replaces the trailing newline."),
        step("f-string", "name = \"Py\"; print(f\"Hi {name}\")", "Expressions inside braces are evaluated."),
        step("Format spec", "print(f\"{3.14159:.2f}\")", "Prints 3.14."),
      ]),
      settings: settings(),
      ..activity(KIND, 2, 1, "Printing and Formatting Output in Python",
        "Practice print() arguments and f-string formatting with live, editable examples.",
        &["python", "demo", "strings", "formatting", "beginner"])
    },
    Activity {
      content: demo("Watch how input() values need conversion.", vec![
        step("Read text", "raw = \"42\"  # as if from input()", "input() always returns a string."),
        step("Convert", "n = int(raw)", "int() parses the digits."),
        step("Bad input", "int(\"4x\")", "Raises ValueError."),
        step("Guard it", "raw.isdigit()", "Check before converting."),
        step("Float input", "float(\"2.5\")", "float() handles decimals."),
      ]),
      settings: settings(),
      ..activity(KIND, 3, 1, "Type Conversion Essentials Demo",
        "Understand why user input arrives as text and learn to convert it safely.",
        &["python", "interactive-demo", "type-conversion", "beginner", "fundamentals"])
    },
    Activity {
      content: demo("Follow the list as it changes.", vec![
        step("Create", "nums = [3, 1, 2]", "A list of three integers."),
        step("Append", "nums.append(5)", "Now [3, 1, 2, 5]."),
        step("Sort in place", "nums.sort()", "Now [1, 2, 3, 5]; sort() returns None."),
        step("Slice copy", "head = nums[:2]", "head is a new list [1, 2]."),
        step("Aliasing", "alias = nums; alias.pop()", "Both names see [1, 2, 3]."),
        step("Copy instead", "copy = nums.copy()", "Changes to copy do not affect nums."),
      ]),
      settings: settings(),
      ..activity(KIND, 4, 2, "Python Lists in Action: Mutation and Aliasing",
        "Explore how list methods change data in place and learn to avoid aliasing surprises.",
        &["python", "interactive-demo", "lists", "intermediate"])
    },
    Activity {
      content: demo("Step through each loop iteration.", vec![
        step("Loop header", "for i in range(3):", "range(3) yields 0, 1, 2."),
        step("Body", "    print(i * i)", "Prints 0, 1, 4."),
        step("While loop", "n = 3\nwhile n:\n    n -= 1", "Stops when n reaches 0."),
        step("break", "for c in \"python\":\n    if c == \"h\": break", "Stops at the first h."),
        step("else clause", "for x in []:\n    pass\nelse:\n    print(\"no break\")", "Runs because no break happened."),
      ]),
      settings: settings(),
      ..activity(KIND, 5, 2, "Visualizing Python Loops Step by Step",
        "Practice tracing for and while loops and see how break and else change the flow.",
        &["python", "interactive-demo", "loops", "intermediate", "control-flow"])
    },
    Activity {
      content: demo("Inspect the dictionary after each operation.", vec![
        step("Create", "stock = {\"apple\": 3}", "One key-value pair."),
        step("Add", "stock[\"pear\"] = 5", "New keys are inserted."),
        step("Update", "stock[\"apple\"] += 1", "apple is now 4."),
        step("Safe lookup", "stock.get(\"kiwi\", 0)", "Returns 0 instead of raising."),
        step("Iterate", "for k, v in stock.items(): print(k, v)", "Insertion order is kept."),
        step("Remove", "stock.pop(\"pear\")", "Returns 5 and deletes the key."),
      ]),
      settings: settings(),
      ..activity(KIND, 6, 2, "Dictionary Operations Interactive Demo",
        "Learn to create, update, query and iterate dictionaries through a guided inventory example.",
        &["python", "interactive-demo", "dictionaries", "intermediate"])
    },
    Activity {
      content: demo("Watch the call stack grow and shrink.", vec![
        step("Define", "def fact(n):\n    return 1 if n <= 1 else n * fact(n - 1)", "A recursive definition."),
        step("Call", "fact(3)", "Calls fact(2), which calls fact(1)."),
        step("Base case", "fact(1)", "Returns 1 without recursing."),
        step("Unwind", "2 * 1, then 3 * 2", "Results multiply on the way back."),
        step("Depth limit", "import sys; sys.getrecursionlimit()", "Usually 1000 frames."),
      ]),
      settings: settings(),
      ..activity(KIND, 7, 3, "Recursion and the Call Stack: A Deep Dive Demo",
        "Understand recursion by watching frames being pushed and popped during a factorial call.",
        &["python", "interactive-demo", "recursion", "functions", "advanced"])
    },
    Activity {
      content: demo("Follow how an exception travels up the stack.", vec![
        step("Raise", "def parse(s):\n    return int(s)", "int(\"x\") raises ValueError."),
        step("Propagate", "def load(s):\n    return parse(s)", "load does not catch, so the error moves up."),
        step("Catch", "try:\n    load(\"x\")\nexcept ValueError as e:\n    print(e)", "Handled at the caller."),
        step("Finally", "finally:\n    print(\"cleanup\")", "Runs on every path."),
        step("Re-raise", "except ValueError:\n    raise", "Bare raise keeps the original traceback."),
      ]),
      settings: settings(),
      ..activity(KIND, 8, 3, "How Exceptions Propagate in Python",
        "Explore the journey of an exception from raise to handler and learn where cleanup code belongs.",
        &["python", "interactive-demo", "exceptions", "advanced"])
    },
    Activity {
      content: demo("Build a class step by step and inspect the objects.", vec![
        step("Define", "class Account:\n    def __init__(self, owner):\n        self.owner = owner\n        self.balance = 0", "Each instance gets its own state."),
        step("Instantiate", "acct = Account(\"Ada\")", "__init__ runs with self bound to acct."),
        step("Add behavior", "def deposit(self, amount):\n    self.balance += amount", "Methods change instance state."),
        step("Represent", "def __repr__(self):\n    return f\"Account({self.owner!r})\"", "Controls how the object prints."),
        step("Inherit", "class Savings(Account):\n    rate = 0.02", "Savings reuses Account and adds a class attribute."),
      ]),
      settings: settings(),
      ..activity(KIND, 9, 4, "Object-Oriented Python Mastery: Building a Bank Account",
        "Master classes, instances, methods and inheritance through an interactive bank-account model.",
        &["python", "interactive-demo", "oop", "classes", "expert"])
    },
    Activity {
      content: demo("Step through the generator and watch it pause.", vec![
        step("Define", "def countdown(n):\n    while n > 0:\n        yield n\n        n -= 1", "A function with yield is a generator."),
        step("Create", "gen = countdown(3)", "Nothing runs yet."),
        step("First value", "next(gen)", "Runs until the first yield: 3."),
        step("Resume", "next(gen)", "Continues after the yield: 2."),
        step("Exhaust", "list(gen)", "Collects the rest: [1]."),
        step("Done", "next(gen)", "Raises StopIteration."),
      ]),
      settings: settings(),
      ..activity(KIND, 10, 4, "Ultimate Guide to Python Generators in Action",
        "Understand lazy evaluation by pausing and resuming a generator one value at a time.",
        &["python", "interactive-demo", "generators", "expert"])
    },
  ]
}
