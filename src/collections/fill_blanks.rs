use serde_json::{json, Value};

use super::activity;
use crate::domain::{Activity, ActivityType};

const KIND: ActivityType = ActivityType::FillBlanks;

/// One exercise; `___` in `code` marks a blank, answers are in blank order.
fn ex(code: &str, answers: &[&str], hint: &str) -> Value {
  json!({ "code": code, "answers": answers, "hint": hint })
}

fn settings() -> Value {
  json!({ "caseSensitive": true, "allowRetry": true, "showHints": true, "timeLimit": null })
}

pub fn activities() -> Vec<Activity> {
  vec![
    Activity {
      content: json!({
        "instructions": "Fill each blank so the program prints the expected output.",
        "exercises": [
          ex("name = \"Ada\"\n___(name)", &["print"], "Which built-in writes to the screen?"),
          ex("age = ___(\"36\")", &["int"], "Convert the text to a whole number."),
          ex("pi = ___\nprint(type(pi))  # <class 'float'>", &["3.14"], "Any number with a decimal point."),
          ex("is_ready = ___", &["True"], "Boolean literals start with a capital letter."),
          ex("x = 5\nx ___ 2  # x is now 7", &["+="], "Augmented assignment."),
          ex("greeting = \"Hi, \" ___ name", &["+"], "Strings concatenate with an operator."),
        ]
      }),
      settings: settings(),
      ..activity(KIND, 1, 1, "Complete the Code: Python Variables and Printing",
        "Practice assigning variables, converting types and printing results by filling in missing code.",
        &["python", "fill-blanks", "variables", "beginner"])
    },
    Activity {
      content: json!({
        "instructions": "Complete the string operations.",
        "exercises": [
          ex("word = \"python\"\nprint(word.___())  # PYTHON", &["upper"], "A method that capitalizes every letter."),
          ex("print(\"a-b-c\".___(\"-\"))  # ['a', 'b', 'c']", &["split"], "Break a string into a list."),
          ex("print(\"-\".___([\"a\", \"b\"]))  # a-b", &["join"], "The separator calls this method."),
          ex("print(\"  hi  \".___())  # hi", &["strip"], "Remove surrounding whitespace."),
          ex("print(\"banana\".___(\"a\"))  # 3", &["count"], "How many times a substring appears."),
          ex("print(f\"{___:.1f}\")  # 2.5", &["2.5"], "Any value that formats to 2.5."),
        ]
      }),
      settings: settings(),
      ..activity(KIND, 2, 1, "Python String Methods Fill-in-the-Blank",
        "Learn the most useful string methods by completing short snippets with the right call.",
        &["python", "fill-blanks", "strings", "beginner"])
    },
    Activity {
      content: json!({
        "instructions": "Fill in the condition or keyword so each branch behaves as described.",
        "exercises": [
          ex("if temperature ___ 30:\n    print(\"hot\")", &[">"], "Hot means above 30."),
          ex("if score >= 90:\n    grade = \"A\"\n___ score >= 80:\n    grade = \"B\"", &["elif"], "Python's else-if."),
          ex("if not items:\n    print(\"empty\")\n___:\n    print(len(items))", &["else"], "The fallback branch."),
          ex("status = \"adult\" ___ age >= 18 else \"minor\"", &["if"], "Conditional expression."),
          ex("if name ___ None:\n    name = \"guest\"", &["is"], "Compare identity with None."),
          ex("if 0 ___ x ___ 10:\n    print(\"in range\")", &["<", "<"], "Comparisons can be chained."),
        ]
      }),
      settings: settings(),
      ..activity(KIND, 3, 1, "Conditionals Fill-in-the-Blank Essentials",
        "Understand if, elif and else by writing the missing comparison or keyword in each snippet.",
        &["python", "fill-blanks", "conditionals", "beginner", "control-flow"])
    },
    Activity {
      content: json!({
        "instructions": "Complete each loop.",
        "hints": ["range(stop) starts at 0.", "enumerate yields (index, value)."],
        "exercises": [
          ex("for i in ___(5):\n    print(i)  # 0..4", &["range"], "Generate a sequence of integers."),
          ex("for i, fruit in ___(fruits):\n    print(i, fruit)", &["enumerate"], "Need index and value."),
          ex("while count ___ 0:\n    count -= 1", &[">"], "Keep going while positive."),
          ex("for n in numbers:\n    if n < 0:\n        ___", &["continue"], "Skip negative numbers."),
          ex("for line in lines:\n    if line == \"END\":\n        ___", &["break"], "Stop at the sentinel."),
          ex("for a, b in ___(xs, ys):\n    print(a + b)", &["zip"], "Walk two sequences together."),
        ]
      }),
      settings: settings(),
      ..activity(KIND, 4, 2, "Python Loop Patterns Fill-in-the-Blank",
        "Practice writing for and while loops with range, enumerate, zip, break and continue.",
        &["python", "fill-blanks", "loops", "intermediate"])
    },
    Activity {
      content: json!({
        "instructions": "Complete the list and tuple operations.",
        "exercises": [
          ex("nums = [3, 1, 2]\nnums.___()\nprint(nums)  # [1, 2, 3]", &["sort"], "Sort in place."),
          ex("first, ___ = (1, 2)", &["second"], "Unpack the second element into a name."),
          ex("evens = nums[___]  # every second item from index 0", &["::2"], "Slice with a step."),
          ex("last = nums[___]", &["-1"], "Negative index."),
          ex("squares = [x ___ 2 for x in nums]", &["**"], "Exponent operator."),
          ex("stack = []\nstack.___(4)\ntop = stack.___()", &["append", "pop"], "Push then pop."),
        ]
      }),
      settings: settings(),
      ..activity(KIND, 5, 2, "Lists and Tuples Code Completion",
        "Learn slicing, unpacking and list methods by completing real snippets.",
        &["python", "fill-blanks", "lists", "tuples", "intermediate"])
    },
    Activity {
      content: json!({
        "instructions": "Fill in the dictionary and set operations.",
        "exercises": [
          ex("ages = {\"ann\": 30}\nprint(ages.___(\"bob\", 0))  # 0", &["get"], "Lookup with a default."),
          ex("for key, value in ages.___():\n    print(key, value)", &["items"], "Iterate over pairs."),
          ex("counts[word] = counts.get(word, ___) + 1", &["0"], "Start counting at zero."),
          ex("unique = ___(names)", &["set"], "Remove duplicates."),
          ex("common = a ___ b  # intersection", &["&"], "Set intersection operator."),
          ex("if \"ann\" ___ ages:\n    print(\"found\")", &["in"], "Membership test."),
        ]
      }),
      settings: settings(),
      ..activity(KIND, 6, 2, "Dictionaries and Sets Fill-in-the-Blank Practice",
        "Practice lookups, iteration and set algebra by writing the missing pieces.",
        &["python", "fill-blanks", "dictionaries", "sets", "intermediate"])
    },
    Activity {
      content: json!({
        "instructions": "Complete each function definition.",
        "exercises": [
          ex("___ area(w, h):\n    return w * h", &["def"], "Keyword that starts a function."),
          ex("def greet(name=___):\n    return \"Hi \" + name", &["\"friend\""], "Any default string works."),
          ex("def total(*___):\n    return sum(nums)", &["nums"], "Name the collected arguments."),
          ex("def config(**___):\n    return opts", &["opts"], "Keyword arguments dict."),
          ex("double = ___ x: x * 2", &["lambda"], "Anonymous function."),
          ex("def counter():\n    n = 0\n    def inc():\n        ___ n\n        n += 1\n        return n\n    return inc", &["nonlocal"],
            "Rebind a variable from the enclosing scope."),
        ]
      }),
      settings: settings(),
      ..activity(KIND, 7, 3, "Writing Python Functions: Complete the Definitions",
        "Master def, default values, variable arguments, lambdas and closures by completing function bodies.",
        &["python", "fill-blanks", "functions", "advanced", "closures"])
    },
    Activity {
      content: json!({
        "instructions": "Complete the error handling code.",
        "exercises": [
          ex("___:\n    value = int(text)\nexcept ValueError:\n    value = 0", &["try"], "Start a protected block."),
          ex("try:\n    f()\n___ KeyError as e:\n    print(e)", &["except"], "Handle a specific error."),
          ex("try:\n    f()\nfinally:\n    conn.___()", &["close"], "Always release the resource."),
          ex("if amount < 0:\n    ___ ValueError(\"negative\")", &["raise"], "Signal an error."),
          ex("___ open(\"data.txt\") as f:\n    text = f.read()", &["with"], "Context manager."),
          ex("class AppError(___):\n    pass", &["Exception"], "Base class for custom errors."),
        ]
      }),
      settings: settings(),
      ..activity(KIND, 8, 3, "Exception Handling Fill-in-the-Blank Challenge",
        "Learn try, except, finally, raise and with by filling the blanks in error-handling code.",
        &["python", "fill-blanks", "exceptions", "advanced", "best-practices"])
    },
    Activity {
      content: json!({
        "instructions": "Complete the class definitions.",
        "exercises": [
          ex("class Point:\n    def ___(self, x, y):\n        self.x = x\n        self.y = y", &["__init__"], "The initializer."),
          ex("class Dog(___):\n    pass", &["Animal"], "Inherit from the base class."),
          ex("def __init__(self, name):\n    ___().__init__(name)", &["super"], "Call the parent initializer."),
          ex("@___\ndef area(self):\n    return self.w * self.h", &["property"], "Read like an attribute."),
          ex("@___\ndef from_str(cls, s):\n    return cls(*s.split())", &["classmethod"], "Alternative constructor."),
          ex("def __repr__(self):\n    return f\"Point({self.x}, {self.___})\"", &["y"], "The other coordinate."),
        ]
      }),
      settings: settings(),
      ..activity(KIND, 9, 4, "Object-Oriented Python: Complete the Class",
        "Master initializers, inheritance, properties and class methods by completing class bodies.",
        &["python", "fill-blanks", "oop", "classes", "expert"])
    },
    Activity {
      content: json!({
        "instructions": "Complete the generator and iterator code.",
        "exercises": [
          ex("def countdown(n):\n    while n > 0:\n        ___ n\n        n -= 1", &["yield"], "Produce a value lazily."),
          ex("it = ___([1, 2, 3])\nprint(next(it))", &["iter"], "Get an iterator."),
          ex("gen = (x * x ___ x in range(4))", &["for"], "Generator expression."),
          ex("def chain(a, b):\n    yield ___ a\n    yield from b", &["from"], "Delegate to a sub-iterator."),
          ex("import ___\npairs = itertools.combinations(\"abc\", 2)", &["itertools"], "Iterator toolbox module."),
          ex("total = ___(x for x in range(10) if x % 2 == 0)", &["sum"], "Add up the even numbers."),
        ]
      }),
      settings: settings(),
      ..activity(KIND, 10, 4, "Ultimate Generators and Iterators Code Completion",
        "Understand lazy evaluation with yield, iter and generator expressions by completing advanced snippets.",
        &["python", "fill-blanks", "generators", "iterators", "expert"])
    },
  ]
}
