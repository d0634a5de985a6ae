use serde_json::{json, Value};

use super::activity;
use crate::domain::{Activity, ActivityType};

const KIND: ActivityType = ActivityType::Quiz;

fn q(question: &str, options: &[&str], correct: usize, explanation: &str) -> Value {
  json!({
    "question": question,
    "options": options,
    "correct": correct,
    "explanation": explanation,
  })
}

fn settings(time_limit_secs: u32) -> Value {
  json!({
    "timeLimit": time_limit_secs,
    "allowRetry": true,
    "showExplanations": true,
    "shuffleQuestions": true,
    "passingScore": 70,
  })
}

pub fn activities() -> Vec<Activity> {
  vec![
    Activity {
      content: json!({
        "instructions": "Answer each question about variables and built-in types. Read the explanation after every answer.",
        "questions": [
          q("Which of these is a valid variable name?", &["2nd_place", "second-place", "second_place", "second place"], 2,
            "Names may contain letters, digits and underscores but cannot start with a digit or contain hyphens or spaces."),
          q("What is the type of 3.0?", &["int", "float", "str", "decimal"], 1, "A literal with a decimal point is a float."),
          q("What does type(\"42\") return?", &["<class 'int'>", "<class 'str'>", "<class 'float'>", "<class 'bool'>"], 1,
            "Quotes make a string, even when the characters are digits."),
          q("Which value is falsy?", &["\"0\"", "[0]", "0", "\" \""], 2, "The integer zero is falsy; non-empty strings and lists are truthy."),
          q("After a = 5 and b = a, then a = 7, what is b?", &["5", "7", "None", "An error"], 0,
            "Rebinding a does not change the object b refers to."),
          q("What does int(\"12\") + 3 evaluate to?", &["\"123\"", "15", "\"15\"", "TypeError"], 1, "int() converts the string to 12 before adding."),
          q("Which statement swaps x and y?", &["x = y; y = x", "x, y = y, x", "swap(x, y)", "x <-> y"], 1,
            "Tuple unpacking evaluates the right side first, so both values swap."),
          q("What is None?", &["The number zero", "An empty string", "A singleton meaning no value", "A keyword for false"], 2,
            "None is the single instance of NoneType and represents the absence of a value."),
        ]
      }),
      settings: settings(300),
      ..activity(KIND, 1, 1, "Python Variables and Data Types Quiz",
        "Learn how Python names values and which built-in types you meet first. Test your understanding of int, float, str, bool and None.",
        &["python", "quiz", "variables", "data-types", "beginner", "fundamentals"])
    },
    Activity {
      content: json!({
        "instructions": "Pick the output of each string expression.",
        "hints": ["Indexes start at 0.", "Slices exclude the end index."],
        "questions": [
          q("What is \"python\"[0]?", &["\"p\"", "\"y\"", "\"n\"", "IndexError"], 0, "Index 0 is the first character."),
          q("What is \"python\"[-1]?", &["\"p\"", "\"n\"", "\"o\"", "IndexError"], 1, "Negative indexes count from the end."),
          q("What is \"python\"[1:4]?", &["\"pyt\"", "\"yth\"", "\"ytho\"", "\"thon\""], 1, "The slice takes indexes 1, 2 and 3."),
          q("What does \"Hi\" * 3 produce?", &["\"Hi3\"", "\"HiHiHi\"", "TypeError", "\"Hi Hi Hi\""], 1, "Multiplying a string repeats it."),
          q("What does \"a,b,c\".split(\",\") return?", &["\"abc\"", "[\"a\", \"b\", \"c\"]", "(\"a\", \"b\", \"c\")", "[\"a,b,c\"]"], 1,
            "split returns a list of the pieces between separators."),
          q("Which method removes surrounding whitespace?", &["trim()", "strip()", "chop()", "clean()"], 1, "str.strip() removes leading and trailing whitespace."),
          q("What is len(\"hello world\")?", &["10", "11", "12", "2"], 1, "The space counts as a character."),
          q("What does f\"{2 + 3}\" evaluate to?", &["\"{2 + 3}\"", "\"2 + 3\"", "\"5\"", "5"], 2,
            "f-strings evaluate the expression and insert its string form."),
        ]
      }),
      settings: settings(300),
      ..activity(KIND, 2, 1, "Python Strings: Indexing, Slicing and Methods",
        "Practice reading string indexes, slices and common methods. Understand why strings are immutable sequences.",
        &["python", "quiz", "strings", "beginner"])
    },
    Activity {
      content: json!({
        "instructions": "Evaluate each expression the way the interpreter would.",
        "questions": [
          q("What is 7 // 2?", &["3.5", "3", "4", "1"], 1, "// is floor division."),
          q("What is 7 % 3?", &["1", "2", "0", "2.33"], 0, "% gives the remainder."),
          q("What is 2 ** 3?", &["6", "8", "9", "5"], 1, "** is exponentiation."),
          q("What is 10 / 4?", &["2", "2.5", "3", "2.0"], 1, "/ always returns a float."),
          q("What does not (True and False) give?", &["True", "False", "None", "Error"], 0, "True and False is False, negated it is True."),
          q("What is 1 + 2 * 3?", &["9", "7", "6", "5"], 1, "Multiplication binds tighter than addition."),
          q("What is 3 == 3.0?", &["True", "False", "TypeError", "None"], 0, "Numeric equality compares values across int and float."),
          q("What does 0 or \"default\" return?", &["0", "True", "\"default\"", "False"], 2,
            "or returns the first truthy operand, or the last one."),
        ]
      }),
      settings: settings(360),
      ..activity(KIND, 3, 1, "Operators and Expressions Essentials",
        "Understand arithmetic, comparison and boolean operators and the order Python evaluates them in.",
        &["python", "quiz", "operators", "beginner", "core"])
    },
    Activity {
      content: json!({
        "instructions": "Answer questions about list behavior. Some answers depend on mutation.",
        "questions": [
          q("What does [1, 2, 3].append(4) return?", &["[1, 2, 3, 4]", "None", "4", "An error"], 1,
            "append mutates the list in place and returns None."),
          q("What is len([[1, 2], [3]])?", &["3", "2", "1", "4"], 1, "The outer list has two elements."),
          q("What is [1, 2, 3][::-1]?", &["[1, 2, 3]", "[3, 2, 1]", "[3]", "Error"], 1, "A step of -1 walks backwards."),
          q("Which call inserts at the front?", &["lst.push(0, x)", "lst.insert(0, x)", "lst.prepend(x)", "lst.add(x)"], 1,
            "insert(index, value) places value before index."),
          q("What does [1, 2] + [3] produce?", &["[1, 2, 3]", "[4, 2]", "[[1, 2], 3]", "Error"], 0, "+ concatenates lists."),
          q("After b = a where a = [1], a.append(2), what is b?", &["[1]", "[1, 2]", "[2]", "None"], 1,
            "a and b name the same list object."),
          q("What does sorted([3, 1, 2]) return?", &["None", "[1, 2, 3]", "[3, 2, 1]", "[3, 1, 2]"], 1,
            "sorted builds a new sorted list and leaves the input alone."),
          q("What does lst.pop() remove?", &["The first item", "The last item", "A random item", "All items"], 1,
            "Without an argument pop removes and returns the last element."),
        ]
      }),
      settings: settings(420),
      ..activity(KIND, 4, 2, "Mastering Python Lists: Mutation and Slicing",
        "Explore how lists grow, shrink and share references. Learn the difference between methods that mutate and functions that copy.",
        &["python", "quiz", "lists", "intermediate", "data-structures"])
    },
    Activity {
      content: json!({
        "instructions": "Predict which branch runs.",
        "questions": [
          q("With x = 5, what prints? if x > 3: print(\"a\") elif x > 1: print(\"b\")", &["a", "b", "a and b", "nothing"], 0,
            "Only the first true branch of an if/elif chain runs."),
          q("Which keyword starts an alternative condition?", &["else if", "elseif", "elif", "otherwise"], 2, "Python spells it elif."),
          q("What does \"yes\" if 0 else \"no\" evaluate to?", &["\"yes\"", "\"no\"", "0", "None"], 1, "0 is falsy, so the else part is used."),
          q("Is if []: pass executing the body?", &["Yes", "No", "Only in Python 2", "It raises"], 1, "An empty list is falsy."),
          q("What does 1 < x < 10 mean?", &["(1 < x) < 10", "1 < x and x < 10", "A syntax error", "x is between 1 and 10 inclusive"], 1,
            "Comparisons chain, and x is evaluated once."),
          q("Which compares identity rather than equality?", &["==", "is", "equals", "==="], 1, "is checks whether two names refer to the same object."),
          q("What does match/case need after case?", &["A pattern", "A boolean", "A function", "Nothing"], 0,
            "Structural pattern matching compares the subject against patterns."),
          q("What is the result of bool(\"False\")?", &["False", "True", "None", "Error"], 1, "Any non-empty string is truthy."),
        ]
      }),
      settings: settings(420),
      ..activity(KIND, 5, 2, "Conditional Logic Challenge in Python",
        "Practice if, elif and else along with truthiness rules. Understand how chained comparisons and conditional expressions work.",
        &["python", "quiz", "conditionals", "intermediate", "control-flow"])
    },
    Activity {
      content: json!({
        "instructions": "Work out how many times each loop runs and what it produces.",
        "questions": [
          q("How many numbers does range(2, 10, 3) yield?", &["2", "3", "4", "8"], 1, "It yields 2, 5 and 8."),
          q("What does break do?", &["Skips to next iteration", "Leaves the innermost loop", "Stops the program", "Restarts the loop"], 1,
            "break exits the nearest enclosing loop."),
          q("What does continue do?", &["Leaves the loop", "Skips the rest of this iteration", "Pauses", "Repeats the iteration"], 1,
            "continue jumps to the next iteration."),
          q("When does a for loop's else block run?", &["Always", "When the loop finished without break", "When it breaks", "Never"], 1,
            "The else clause runs only when no break happened."),
          q("What does enumerate([\"a\", \"b\"]) yield first?", &["\"a\"", "(0, \"a\")", "(1, \"a\")", "0"], 1, "Pairs of index and value, starting at 0."),
          q("What is sum(i for i in range(4))?", &["6", "10", "4", "3"], 0, "0 + 1 + 2 + 3 = 6."),
          q("What risk does while True carry?", &["Syntax error", "An infinite loop without break", "It runs once", "None"], 1,
            "Without a break or return it never stops."),
          q("What does zip([1, 2], [\"a\", \"b\", \"c\"]) produce?", &["3 pairs", "2 pairs", "An error", "1 pair"], 1,
            "zip stops at the shortest iterable."),
        ]
      }),
      settings: settings(420),
      ..activity(KIND, 6, 2, "Python Loops: for, while and range",
        "Learn to predict loop output and control flow with break, continue and else clauses.",
        &["python", "quiz", "loops", "intermediate"])
    },
    Activity {
      content: json!({
        "instructions": "Answer questions about defining and calling functions.",
        "hints": ["Default values are evaluated once, when def runs."],
        "questions": [
          q("What does a function without return give back?", &["0", "None", "An empty string", "Nothing, it raises"], 1,
            "Falling off the end returns None."),
          q("Which is a correct default argument?", &["def f(x=1, y):", "def f(x, y=1):", "def f(x=, y):", "def f(=1):"], 1,
            "Parameters with defaults must follow those without."),
          q("What does *args collect?", &["Keyword arguments", "Extra positional arguments", "All globals", "Only the first argument"], 1,
            "*args gathers surplus positional arguments into a tuple."),
          q("What does **kwargs collect?", &["Extra keyword arguments", "Exponents", "Positional arguments", "Nothing"], 0,
            "**kwargs gathers surplus keyword arguments into a dict."),
          q("What is the pitfall of def f(items=[]):?", &["Syntax error", "The list is shared between calls", "items is None", "It is slower"], 1,
            "Mutable defaults persist across calls."),
          q("What does lambda x: x * 2 create?", &["A class", "An anonymous function", "A generator", "A tuple"], 1, "lambda builds a small function expression."),
          q("Which scope is searched first for a name?", &["Global", "Built-in", "Local", "Enclosing"], 2, "LEGB: local, enclosing, global, built-in."),
          q("What does return a, b return?", &["Two values separately", "A tuple", "A list", "Only a"], 1, "Comma-separated values form a tuple."),
        ]
      }),
      settings: settings(480),
      ..activity(KIND, 7, 3, "Functions Deep Dive: Arguments, Scope and Return Values",
        "Master function definitions, default and variable arguments, and how Python resolves names in nested scopes.",
        &["python", "quiz", "functions", "advanced", "scope"])
    },
    Activity {
      content: json!({
        "instructions": "Answer questions about dictionaries and sets.",
        "questions": [
          q("What does d.get(\"x\", 0) return if \"x\" is missing?", &["KeyError", "None", "0", "\"x\""], 2, "get returns the default when the key is absent."),
          q("Which type cannot be a dict key?", &["str", "tuple", "list", "int"], 2, "Keys must be hashable; lists are mutable."),
          q("What is len({1, 1, 2})?", &["3", "2", "1", "Error"], 1, "Sets drop duplicates."),
          q("What does {1, 2} & {2, 3} give?", &["{1, 2, 3}", "{2}", "{1, 3}", "set()"], 1, "& is intersection."),
          q("What does d.items() yield?", &["Keys", "Values", "Key-value pairs", "Indexes"], 2, "items() yields (key, value) tuples."),
          q("How do you create an empty set?", &["{}", "set()", "[]", "empty()"], 1, "{} is an empty dict."),
          q("What is {k: k * 2 for k in range(3)}?", &["{0: 0, 1: 2, 2: 4}", "[0, 2, 4]", "{0, 2, 4}", "Error"], 0, "A dict comprehension."),
          q("Since Python 3.7, dicts preserve...", &["Sorted keys", "Insertion order", "Random order", "Value order"], 1,
            "Iteration follows insertion order."),
        ]
      }),
      settings: settings(480),
      ..activity(KIND, 8, 3, "Dictionaries and Sets Quiz",
        "Understand hashing, lookups and set algebra. Learn when a dict or a set is the right tool.",
        &["python", "quiz", "dictionaries", "sets", "advanced"])
    },
    Activity {
      content: json!({
        "instructions": "Answer questions about classes and objects.",
        "questions": [
          q("What is self?", &["A keyword", "The instance the method was called on", "The class", "A global"], 1,
            "self is the conventional name of the first parameter, bound to the instance."),
          q("Which method initializes a new instance?", &["__new__ only", "__init__", "__create__", "__start__"], 1, "__init__ sets up the instance."),
          q("How does class Dog(Animal): relate Dog to Animal?", &["Composition", "Inheritance", "Aggregation", "No relation"], 1, "Dog subclasses Animal."),
          q("What does super().__init__() do?", &["Creates a new class", "Calls the parent initializer", "Deletes the instance", "Nothing"], 1,
            "It delegates to the next class in the MRO."),
          q("Which decorator makes a method read like an attribute?", &["@staticmethod", "@property", "@classmethod", "@attribute"], 1,
            "@property exposes a getter as an attribute."),
          q("What does __str__ control?", &["Equality", "The user-facing string form", "Hashing", "Length"], 1, "print() and str() use __str__."),
          q("A class attribute is...", &["Per instance", "Shared by all instances", "Private", "Immutable"], 1, "It lives on the class object."),
          q("What is the first argument of a @classmethod?", &["self", "cls", "None", "The instance"], 1, "Class methods receive the class."),
        ]
      }),
      settings: settings(600),
      ..activity(KIND, 9, 4, "Object-Oriented Python Mastery Quiz",
        "Master classes, inheritance, special methods and properties. Understand how Python looks up attributes on instances and classes.",
        &["python", "quiz", "oop", "classes", "expert"])
    },
    Activity {
      content: json!({
        "instructions": "Answer questions about exceptions and file handling.",
        "questions": [
          q("Which block always runs?", &["except", "else", "finally", "raise"], 2, "finally runs whether or not an exception occurred."),
          q("When does try/else run?", &["On error", "When no exception was raised", "Always", "Never"], 1, "else runs only if the try body succeeded."),
          q("What does int(\"abc\") raise?", &["TypeError", "ValueError", "KeyError", "Nothing"], 1, "The type is right but the value cannot be parsed."),
          q("What does with open(p) as f: guarantee?", &["Faster reads", "The file is closed afterwards", "Binary mode", "The file exists"], 1,
            "The context manager closes the file even on errors."),
          q("Which mode appends to a file?", &["\"r\"", "\"w\"", "\"a\"", "\"x\""], 2, "\"a\" appends; \"w\" truncates."),
          q("How do you raise your own error?", &["throw ValueError()", "raise ValueError(\"msg\")", "error(\"msg\")", "except ValueError"], 1,
            "raise with an exception instance."),
          q("Which catches every regular exception?", &["except BaseException", "except Exception", "except Error", "catch all"], 1,
            "Exception is the base of ordinary errors; BaseException also covers exits."),
          q("What does d[\"missing\"] raise on a dict?", &["IndexError", "KeyError", "ValueError", "None"], 1, "Missing keys raise KeyError."),
        ]
      }),
      settings: settings(600),
      ..activity(KIND, 10, 4, "Ultimate Python Exceptions and File Handling Challenge",
        "Learn how errors propagate and how to handle them cleanly. Practice reading and writing files with context managers.",
        &["python", "quiz", "exceptions", "files", "expert", "best-practices"])
    },
  ]
}
