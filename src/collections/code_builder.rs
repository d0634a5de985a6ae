use serde_json::{json, Value};

use super::activity;
use crate::domain::{Activity, ActivityType};

const KIND: ActivityType = ActivityType::CodeBuilder;

/// `lines` are given in solution order; blocks are numbered from 1.
fn puzzle(instructions: &str, lines: &[&str], distractors: &[&str]) -> Value {
  let mut blocks: Vec<Value> = lines
    .iter()
    .enumerate()
    .map(|(i, code)| json!({ "id": i + 1, "code": code }))
    .collect();
  let order: Vec<usize> = (1..=lines.len()).collect();
  for (i, code) in distractors.iter().enumerate() {
    blocks.push(json!({ "id": lines.len() + i + 1, "code": code, "distractor": true }));
  }
  json!({ "instructions": instructions, "blocks": blocks, "solutionOrder": order })
}

fn settings() -> Value {
  json!({ "allowRetry": true, "showIndentGuides": true, "checkIndentation": true, "timeLimit": null })
}

pub fn activities() -> Vec<Activity> {
  vec![
    Activity {
      content: puzzle("Arrange the blocks to ask for a name and greet the user.", &[
        "name = input(\"Name: \")", "name = name.strip()", "if not name:", "    name = \"friend\"", "message = f\"Hello, {name}!\"", "print(message)",
      ], &["print(Message)"]),
      settings: settings(),
      ..activity(KIND, 1, 1, "Build a Python Greeting Program",
        "Learn program order by arranging input, cleanup and output statements.",
        &["python", "code-builder", "input-output", "beginner"])
    },
    Activity {
      content: puzzle("Order the blocks to sum the numbers from 1 to 10.", &[
        "total = 0", "for n in range(1, 11):", "    total += n", "print(total)", "assert total == 55", "print(\"done\")",
      ], &["for n in range(10):"]),
      settings: settings(),
      ..activity(KIND, 2, 1, "Assemble a Summing Loop",
        "Practice loop structure and indentation by assembling a running total.",
        &["python", "code-builder", "loops", "beginner"])
    },
    Activity {
      content: puzzle("Build a program that classifies a temperature.", &[
        "temp = 25", "if temp > 30:", "    label = \"hot\"", "elif temp > 15:", "    label = \"mild\"", "else:", "    label = \"cold\"", "print(label)",
      ], &["else if temp > 15:"]),
      settings: settings(),
      ..activity(KIND, 3, 1, "Python if/elif/else Block Builder",
        "Understand branch order by arranging an if/elif/else chain.",
        &["python", "code-builder", "conditionals", "beginner"])
    },
    Activity {
      content: puzzle("Arrange a function that returns the largest number in a list.", &[
        "def largest(nums):", "    best = nums[0]", "    for n in nums[1:]:", "        if n > best:", "            best = n", "    return best",
      ], &["    return n"]),
      settings: settings(),
      ..activity(KIND, 4, 2, "Build a Find-the-Maximum Function",
        "Practice writing a function with a loop and a running best value.",
        &["python", "code-builder", "functions", "intermediate"])
    },
    Activity {
      content: puzzle("Order the code that counts letters with a dictionary.", &[
        "counts = {}", "for ch in \"banana\":", "    counts[ch] = counts.get(ch, 0) + 1", "for ch, n in sorted(counts.items()):", "    print(ch, n)", "print(len(counts))",
      ], &["    counts[ch] += 1"]),
      settings: settings(),
      ..activity(KIND, 5, 2, "Dictionary Letter Counter Builder",
        "Learn the counting idiom by assembling a dictionary-based letter counter.",
        &["python", "code-builder", "dictionaries", "intermediate"])
    },
    Activity {
      content: puzzle("Arrange the code that reads numbers safely.", &[
        "values = []", "for raw in [\"1\", \"x\", \"3\"]:", "    try:", "        values.append(int(raw))", "    except ValueError:", "        print(\"skip\", raw)", "print(values)",
      ], &["    catch ValueError:"]),
      settings: settings(),
      ..activity(KIND, 6, 2, "Build Safe Input Parsing with try/except",
        "Understand exception handling by assembling a loop that skips invalid input.",
        &["python", "code-builder", "exceptions", "intermediate"])
    },
    Activity {
      content: puzzle("Arrange a class with an initializer and a method.", &[
        "class Counter:", "    def __init__(self):", "        self.value = 0", "    def increment(self):", "        self.value += 1", "        return self.value",
      ], &["    def increment():"]),
      settings: settings(),
      ..activity(KIND, 7, 3, "Assemble a Python Counter Class",
        "Practice class layout by ordering the initializer and methods of a small class.",
        &["python", "code-builder", "classes", "advanced"])
    },
    Activity {
      content: puzzle("Build a recursive function that reverses a string.", &[
        "def reverse(s):", "    if len(s) <= 1:", "        return s", "    return reverse(s[1:]) + s[0]", "print(reverse(\"python\"))", "print(reverse(\"\"))",
      ], &["    return s[0] + reverse(s[1:])"]),
      settings: settings(),
      ..activity(KIND, 8, 3, "Recursive String Reversal Builder",
        "Understand base cases and recursive steps by building a recursive reverse function.",
        &["python", "code-builder", "recursion", "advanced"])
    },
    Activity {
      content: puzzle("Arrange a generator that yields squares lazily.", &[
        "def squares(limit):", "    n = 0", "    while n < limit:", "        yield n * n", "        n += 1", "print(list(squares(4)))",
      ], &["        return n * n"]),
      settings: settings(),
      ..activity(KIND, 9, 4, "Generator Function Block Builder",
        "Learn how yield pauses a function by assembling a square-number generator.",
        &["python", "code-builder", "generators", "expert"])
    },
    Activity {
      content: puzzle("Build a timing context manager with contextlib.", &[
        "import time", "from contextlib import contextmanager", "@contextmanager", "def timed(label):", "    start = time.perf_counter()",
        "    yield", "    print(label, time.perf_counter() - start)", "with timed(\"work\"):", "    sum(range(1000))",
      ], &["    return"]),
      settings: settings(),
      ..activity(KIND, 10, 4, "Build a Context Manager with contextlib",
        "Master the with statement by assembling a generator-based context manager.",
        &["python", "code-builder", "context-managers", "expert"])
    },
  ]
}
