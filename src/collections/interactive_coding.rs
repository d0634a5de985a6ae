use serde_json::{json, Value};

use super::activity;
use crate::domain::{Activity, ActivityType};

const KIND: ActivityType = ActivityType::InteractiveCoding;

fn test_case(input: &str, expected: &str) -> Value {
  json!({ "input": input, "expected": expected })
}

fn challenge(instructions: &str, starter: &str, solution: &str, tests: Vec<Value>, hints: &[&str]) -> Value {
  json!({
    "instructions": instructions,
    "starterCode": starter,
    "solution": solution,
    "testCases": tests,
    "hints": hints,
  })
}

fn settings(time_limit_secs: u32) -> Value {
  json!({ "language": "python", "timeLimit": time_limit_secs, "allowRetry": true, "showSolutionAfterAttempts": 3, "runTests": true })
}

pub fn activities() -> Vec<Activity> {
  vec![
    Activity {
      content: challenge(
        "Write greet(name) that returns \"Hello, <name>!\".",
        "def greet(name):\n    # your code here\n    pass\n",
        "def greet(name):\n    return f\"Hello, {name}!\"\n",
        vec![test_case("greet(\"Ada\")", "\"Hello, Ada!\""), test_case("greet(\"\")", "\"Hello, !\""), test_case("greet(\"Py\")", "\"Hello, Py!\"")],
        &["Use an f-string.", "Remember the exclamation mark."],
      ),
      settings: settings(600),
      ..activity(KIND, 1, 1, "Your First Python Function: Hello, Name!",
        "Learn to define a function, take a parameter and return a formatted string.",
        &["python", "interactive-coding", "functions", "strings", "beginner"])
    },
    Activity {
      content: challenge(
        "Write is_even(n) that returns True for even integers.",
        "def is_even(n):\n    pass\n",
        "def is_even(n):\n    return n % 2 == 0\n",
        vec![test_case("is_even(4)", "True"), test_case("is_even(7)", "False"), test_case("is_even(0)", "True"), test_case("is_even(-2)", "True")],
        &["The modulo operator gives the remainder."],
      ),
      settings: settings(600),
      ..activity(KIND, 2, 1, "Even or Odd? Python Modulo Practice",
        "Practice arithmetic operators and boolean results by writing a tiny predicate.",
        &["python", "coding", "operators", "beginner"])
    },
    Activity {
      content: challenge(
        "Write fizzbuzz(n) returning \"Fizz\" for multiples of 3, \"Buzz\" for multiples of 5, \"FizzBuzz\" for both, otherwise str(n).",
        "def fizzbuzz(n):\n    pass\n",
        "def fizzbuzz(n):\n    if n % 15 == 0:\n        return \"FizzBuzz\"\n    if n % 3 == 0:\n        return \"Fizz\"\n    if n % 5 == 0:\n        return \"Buzz\"\n    return str(n)\n",
        vec![test_case("fizzbuzz(3)", "\"Fizz\""), test_case("fizzbuzz(10)", "\"Buzz\""), test_case("fizzbuzz(30)", "\"FizzBuzz\""), test_case("fizzbuzz(7)", "\"7\"")],
        &["Check the combined case first."],
      ),
      settings: settings(600),
      ..activity(KIND, 3, 1, "The Classic FizzBuzz Challenge in Python",
        "Master conditional branching with the classic FizzBuzz exercise and learn why branch order matters.",
        &["python", "interactive-coding", "conditionals", "beginner", "problem-solving"])
    },
    Activity {
      content: challenge(
        "Write count_vowels(text) returning how many vowels (a, e, i, o, u, any case) the text contains.",
        "def count_vowels(text):\n    pass\n",
        "def count_vowels(text):\n    return sum(1 for c in text.lower() if c in \"aeiou\")\n",
        vec![test_case("count_vowels(\"Python\")", "1"), test_case("count_vowels(\"AEIOU\")", "5"), test_case("count_vowels(\"\")", "0")],
        &["Lowercase the text first.", "A generator expression inside sum() works well."],
      ),
      settings: settings(900),
      ..activity(KIND, 4, 2, "Count the Vowels: Python String Loops",
        "Practice iterating over strings and counting matches with loops or generator expressions.",
        &["python", "interactive-coding", "strings", "loops", "intermediate"])
    },
    Activity {
      content: challenge(
        "Write word_frequencies(text) returning a dict mapping each lowercase word to its count.",
        "def word_frequencies(text):\n    pass\n",
        "def word_frequencies(text):\n    counts = {}\n    for word in text.lower().split():\n        counts[word] = counts.get(word, 0) + 1\n    return counts\n",
        vec![test_case("word_frequencies(\"a b a\")", "{\"a\": 2, \"b\": 1}"), test_case("word_frequencies(\"\")", "{}"), test_case("word_frequencies(\"Hi hi\")", "{\"hi\": 2}")],
        &["dict.get with a default avoids KeyError."],
      ),
      settings: settings(900),
      ..activity(KIND, 5, 2, "Word Frequency Counter with Python Dictionaries",
        "Learn to build a dictionary incrementally by counting words in a sentence.",
        &["python", "interactive-coding", "dictionaries", "intermediate"])
    },
    Activity {
      content: challenge(
        "Write flatten(nested) that turns a list of lists into one flat list, keeping order.",
        "def flatten(nested):\n    pass\n",
        "def flatten(nested):\n    return [x for inner in nested for x in inner]\n",
        vec![test_case("flatten([[1, 2], [3]])", "[1, 2, 3]"), test_case("flatten([])", "[]"), test_case("flatten([[], [4]])", "[4]")],
        &["A comprehension can have two for clauses."],
      ),
      settings: settings(900),
      ..activity(KIND, 6, 2, "Flatten Nested Lists with Comprehensions",
        "Explore nested list comprehensions by flattening a list of lists.",
        &["python", "interactive-coding", "lists", "comprehensions", "intermediate"])
    },
    Activity {
      content: challenge(
        "Write factorial(n) recursively. Raise ValueError for negative n.",
        "def factorial(n):\n    pass\n",
        "def factorial(n):\n    if n < 0:\n        raise ValueError(\"n must be non-negative\")\n    if n <= 1:\n        return 1\n    return n * factorial(n - 1)\n",
        vec![test_case("factorial(0)", "1"), test_case("factorial(5)", "120"), test_case("factorial(-1)", "ValueError")],
        &["Every recursion needs a base case.", "Validate the input before recursing."],
      ),
      settings: settings(1200),
      ..activity(KIND, 7, 3, "Recursive Factorial with Input Validation",
        "Understand recursion and base cases while practicing exceptions for invalid input.",
        &["python", "interactive-coding", "recursion", "exceptions", "advanced"])
    },
    Activity {
      content: challenge(
        "Write binary_search(items, target) returning the index of target in a sorted list, or -1.",
        "def binary_search(items, target):\n    pass\n",
        "def binary_search(items, target):\n    lo, hi = 0, len(items) - 1\n    while lo <= hi:\n        mid = (lo + hi) // 2\n        if items[mid] == target:\n            return mid\n        if items[mid] < target:\n            lo = mid + 1\n        else:\n            hi = mid - 1\n    return -1\n",
        vec![test_case("binary_search([1, 3, 5, 7], 5)", "2"), test_case("binary_search([1, 3, 5, 7], 4)", "-1"), test_case("binary_search([], 1)", "-1"), test_case("binary_search([2], 2)", "0")],
        &["Keep lo and hi as inclusive bounds.", "Halve the search space every step."],
      ),
      settings: settings(1200),
      ..activity(KIND, 8, 3, "Implement Binary Search in Python",
        "Master a fundamental search algorithm and learn how to reason about loop invariants.",
        &["python", "interactive-coding", "algorithms", "search", "advanced"])
    },
    Activity {
      content: challenge(
        "Write a decorator count_calls that records how many times the wrapped function ran in wrapper.calls.",
        "def count_calls(func):\n    pass\n",
        "import functools\n\ndef count_calls(func):\n    @functools.wraps(func)\n    def wrapper(*args, **kwargs):\n        wrapper.calls += 1\n        return func(*args, **kwargs)\n    wrapper.calls = 0\n    return wrapper\n",
        vec![test_case("f = count_calls(lambda: 1); f(); f(); f.calls", "2"), test_case("count_calls(len)(\"ab\")", "2"), test_case("count_calls(len).__name__", "\"len\"")],
        &["Functions are objects and can carry attributes.", "functools.wraps keeps the name."],
      ),
      settings: settings(1500),
      ..activity(KIND, 9, 4, "Build a Call-Counting Decorator",
        "Master closures and decorators by wrapping a function and tracking its calls.",
        &["python", "interactive-coding", "decorators", "closures", "expert"])
    },
    Activity {
      content: challenge(
        "Write a generator fibonacci() that yields Fibonacci numbers forever, and take_n(gen, n) returning the first n as a list.",
        "def fibonacci():\n    pass\n\ndef take_n(gen, n):\n    pass\n",
        "import itertools\n\ndef fibonacci():\n    a, b = 0, 1\n    while True:\n        yield a\n        a, b = b, a + b\n\ndef take_n(gen, n):\n    return list(itertools.islice(gen, n))\n",
        vec![test_case("take_n(fibonacci(), 5)", "[0, 1, 1, 2, 3]"), test_case("take_n(fibonacci(), 0)", "[]"), test_case("take_n(fibonacci(), 8)[-1]", "13")],
        &["Tuple assignment updates both numbers at once.", "itertools.islice stops an infinite generator."],
      ),
      settings: settings(1500),
      ..activity(KIND, 10, 4, "Ultimate Infinite Fibonacci Generator Challenge",
        "Learn lazy evaluation by writing an infinite generator and consuming it safely.",
        &["python", "interactive-coding", "generators", "iterators", "expert"])
    },
  ]
}
