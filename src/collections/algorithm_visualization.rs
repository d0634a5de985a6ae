use serde_json::{json, Value};

use super::activity;
use crate::domain::{Activity, ActivityType};

const KIND: ActivityType = ActivityType::AlgorithmVisualization;

/// Each step is `(array state, highlighted indexes, narration)`.
fn visual(instructions: &str, code: &str, input: Value, steps: &[(Value, Value, &str)]) -> Value {
  let steps: Vec<Value> = steps
    .iter()
    .enumerate()
    .map(|(i, (state, highlight, note))| json!({ "step": i + 1, "state": state, "highlight": highlight, "description": note }))
    .collect();
  json!({ "instructions": instructions, "code": code, "input": input, "steps": steps })
}

fn settings(speed_ms: u32) -> Value {
  json!({ "animationSpeedMs": speed_ms, "allowStepping": true, "showCode": true, "highlightLines": true })
}

pub fn activities() -> Vec<Activity> {
  vec![
    Activity {
      content: visual(
        "Press Next to watch linear search scan the list for 7.",
        "def linear_search(items, target):\n    for i, x in enumerate(items):\n        if x == target:\n            return i\n    return -1\n",
        json!({ "items": [4, 2, 9, 7, 1], "target": 7 }),
        &[
          (json!([4, 2, 9, 7, 1]), json!([0]), "Compare 4 with 7: no match."),
          (json!([4, 2, 9, 7, 1]), json!([1]), "Compare 2 with 7: no match."),
          (json!([4, 2, 9, 7, 1]), json!([2]), "Compare 9 with 7: no match."),
          (json!([4, 2, 9, 7, 1]), json!([3]), "Compare 7 with 7: found at index 3."),
          (json!([4, 2, 9, 7, 1]), json!([3]), "Return 3."),
        ],
      ),
      settings: settings(900),
      ..activity(KIND, 1, 1, "Linear Search Visualized in Python",
        "Learn how a linear search checks each element in turn and when it stops.",
        &["python", "visualization", "search", "algorithms", "beginner"])
    },
    Activity {
      content: visual(
        "Watch the running maximum update as the loop advances.",
        "def find_max(items):\n    best = items[0]\n    for x in items[1:]:\n        if x > best:\n            best = x\n    return best\n",
        json!({ "items": [3, 8, 2, 10, 5] }),
        &[
          (json!({ "best": 3 }), json!([0]), "Start with the first element."),
          (json!({ "best": 8 }), json!([1]), "8 > 3, update best."),
          (json!({ "best": 8 }), json!([2]), "2 is smaller, keep 8."),
          (json!({ "best": 10 }), json!([3]), "10 > 8, update best."),
          (json!({ "best": 10 }), json!([4]), "5 is smaller; return 10."),
        ],
      ),
      settings: settings(900),
      ..activity(KIND, 2, 1, "Finding the Maximum: A Visual Walkthrough",
        "Practice the running-maximum pattern by watching each comparison.",
        &["python", "algorithm-visualization", "loops", "beginner"])
    },
    Activity {
      content: visual(
        "Follow the accumulator as the list is summed.",
        "def total(items):\n    acc = 0\n    for x in items:\n        acc += x\n    return acc\n",
        json!({ "items": [2, 4, 6, 8] }),
        &[
          (json!({ "acc": 0 }), json!([]), "Initialize the accumulator."),
          (json!({ "acc": 2 }), json!([0]), "Add 2."),
          (json!({ "acc": 6 }), json!([1]), "Add 4."),
          (json!({ "acc": 12 }), json!([2]), "Add 6."),
          (json!({ "acc": 20 }), json!([3]), "Add 8 and return 20."),
        ],
      ),
      settings: settings(800),
      ..activity(KIND, 3, 1, "The Accumulator Pattern Visualized",
        "Understand the essential accumulator pattern by watching a running total grow.",
        &["python", "visualization", "loops", "beginner", "fundamentals"])
    },
    Activity {
      content: visual(
        "Watch bubble sort push the largest values to the end.",
        "def bubble_sort(a):\n    n = len(a)\n    for i in range(n):\n        for j in range(n - i - 1):\n            if a[j] > a[j + 1]:\n                a[j], a[j + 1] = a[j + 1], a[j]\n    return a\n",
        json!({ "items": [5, 1, 4, 2] }),
        &[
          (json!([1, 5, 4, 2]), json!([0, 1]), "Swap 5 and 1."),
          (json!([1, 4, 5, 2]), json!([1, 2]), "Swap 5 and 4."),
          (json!([1, 4, 2, 5]), json!([2, 3]), "Swap 5 and 2; 5 is in place."),
          (json!([1, 2, 4, 5]), json!([1, 2]), "Second pass swaps 4 and 2."),
          (json!([1, 2, 4, 5]), json!([0, 1]), "Third pass makes no swaps; sorted."),
        ],
      ),
      settings: settings(1000),
      ..activity(KIND, 4, 2, "Bubble Sort Step-by-Step Visualization",
        "Explore how bubble sort compares neighbors and learn why it needs several passes.",
        &["python", "algorithm-visualization", "sorting", "intermediate"])
    },
    Activity {
      content: visual(
        "Watch selection sort pick the minimum of the unsorted part.",
        "def selection_sort(a):\n    for i in range(len(a)):\n        m = min(range(i, len(a)), key=a.__getitem__)\n        a[i], a[m] = a[m], a[i]\n    return a\n",
        json!({ "items": [29, 10, 14, 37, 13] }),
        &[
          (json!([10, 29, 14, 37, 13]), json!([0, 1]), "Minimum 10 moves to index 0."),
          (json!([10, 13, 14, 37, 29]), json!([1, 4]), "Minimum 13 moves to index 1."),
          (json!([10, 13, 14, 37, 29]), json!([2]), "14 is already in place."),
          (json!([10, 13, 14, 29, 37]), json!([3, 4]), "Minimum 29 moves to index 3."),
          (json!([10, 13, 14, 29, 37]), json!([4]), "Last element is in place."),
        ],
      ),
      settings: settings(1000),
      ..activity(KIND, 5, 2, "Selection Sort Visualized in Python",
        "Learn how selection sort grows a sorted prefix one minimum at a time.",
        &["python", "algorithm-visualization", "sorting", "intermediate"])
    },
    Activity {
      content: visual(
        "Watch binary search halve the range while looking for 23.",
        "def binary_search(a, t):\n    lo, hi = 0, len(a) - 1\n    while lo <= hi:\n        mid = (lo + hi) // 2\n        if a[mid] == t:\n            return mid\n        if a[mid] < t:\n            lo = mid + 1\n        else:\n            hi = mid - 1\n    return -1\n",
        json!({ "items": [2, 5, 8, 12, 16, 23, 38, 56, 72, 91], "target": 23 }),
        &[
          (json!({ "lo": 0, "hi": 9, "mid": 4 }), json!([4]), "16 < 23, search right half."),
          (json!({ "lo": 5, "hi": 9, "mid": 7 }), json!([7]), "56 > 23, search left half."),
          (json!({ "lo": 5, "hi": 6, "mid": 5 }), json!([5]), "23 found at index 5."),
          (json!({ "lo": 5, "hi": 6, "mid": 5 }), json!([5]), "Three comparisons instead of six."),
          (json!({ "result": 5 }), json!([5]), "Return 5."),
        ],
      ),
      settings: settings(1100),
      ..activity(KIND, 6, 2, "Binary Search: Halving the Problem",
        "Understand logarithmic search by watching the lo, hi and mid pointers move.",
        &["python", "algorithm-visualization", "search", "intermediate", "problem-solving"])
    },
    Activity {
      content: visual(
        "Watch merge sort split the list and merge sorted halves.",
        "def merge_sort(a):\n    if len(a) <= 1:\n        return a\n    mid = len(a) // 2\n    left, right = merge_sort(a[:mid]), merge_sort(a[mid:])\n    out = []\n    while left and right:\n        out.append((left if left[0] <= right[0] else right).pop(0))\n    return out + left + right\n",
        json!({ "items": [38, 27, 43, 3] }),
        &[
          (json!([[38, 27], [43, 3]]), json!([]), "Split into two halves."),
          (json!([[38], [27], [43], [3]]), json!([]), "Split until single elements."),
          (json!([[27, 38], [3, 43]]), json!([]), "Merge pairs in order."),
          (json!([3, 27]), json!([]), "Merge step takes 3, then 27."),
          (json!([3, 27, 38, 43]), json!([]), "Append the rest; fully sorted."),
        ],
      ),
      settings: settings(1200),
      ..activity(KIND, 7, 3, "Merge Sort Visualized: Divide and Conquer",
        "Master the divide-and-conquer idea by watching merge sort split and merge.",
        &["python", "algorithm-visualization", "sorting", "recursion", "advanced"])
    },
    Activity {
      content: visual(
        "Follow the recursion tree of fib(4) and spot the repeated work.",
        "def fib(n):\n    if n < 2:\n        return n\n    return fib(n - 1) + fib(n - 2)\n",
        json!({ "n": 4 }),
        &[
          (json!({ "call": "fib(4)" }), json!([]), "fib(4) calls fib(3) and fib(2)."),
          (json!({ "call": "fib(3)" }), json!([]), "fib(3) calls fib(2) and fib(1)."),
          (json!({ "call": "fib(2)" }), json!([]), "fib(2) is computed twice in total."),
          (json!({ "call": "fib(1)" }), json!([]), "Base cases return immediately."),
          (json!({ "result": 3 }), json!([]), "fib(4) = 3 after 9 calls."),
          (json!({ "memo": { "2": 1, "3": 2, "4": 3 } }), json!([]), "Memoization would need only 5 calls."),
        ],
      ),
      settings: settings(1200),
      ..activity(KIND, 8, 3, "Recursion Tree of Fibonacci Explained",
        "Understand why naive recursion repeats work and how memoization fixes it.",
        &["python", "algorithm-visualization", "recursion", "advanced"])
    },
    Activity {
      content: visual(
        "Watch breadth-first search explore a graph level by level.",
        "from collections import deque\n\ndef bfs(graph, start):\n    seen, queue, order = {start}, deque([start]), []\n    while queue:\n        node = queue.popleft()\n        order.append(node)\n        for nxt in graph[node]:\n            if nxt not in seen:\n                seen.add(nxt)\n                queue.append(nxt)\n    return order\n",
        json!({ "graph": { "A": ["B", "C"], "B": ["D"], "C": ["D", "E"], "D": [], "E": [] }, "start": "A" }),
        &[
          (json!({ "queue": ["A"], "order": [] }), json!([]), "Start from A."),
          (json!({ "queue": ["B", "C"], "order": ["A"] }), json!([]), "Visit A, enqueue B and C."),
          (json!({ "queue": ["C", "D"], "order": ["A", "B"] }), json!([]), "Visit B, enqueue D."),
          (json!({ "queue": ["D", "E"], "order": ["A", "B", "C"] }), json!([]), "Visit C; D already seen, enqueue E."),
          (json!({ "queue": [], "order": ["A", "B", "C", "D", "E"] }), json!([]), "Visit D and E; done."),
        ],
      ),
      settings: settings(1300),
      ..activity(KIND, 9, 4, "Breadth-First Search Graph Traversal Visualized",
        "Master queue-based graph traversal and learn why BFS finds shortest paths in unweighted graphs.",
        &["python", "algorithm-visualization", "graphs", "algorithms", "expert"])
    },
    Activity {
      content: visual(
        "Watch the dynamic-programming table fill for the coin-change problem.",
        "def min_coins(coins, amount):\n    dp = [0] + [float(\"inf\")] * amount\n    for a in range(1, amount + 1):\n        for c in coins:\n            if c <= a:\n                dp[a] = min(dp[a], dp[a - c] + 1)\n    return dp[amount] if dp[amount] != float(\"inf\") else -1\n",
        json!({ "coins": [1, 3, 4], "amount": 6 }),
        &[
          (json!([0, 1, null, null, null, null, null]), json!([1]), "dp[1] = 1 using coin 1."),
          (json!([0, 1, 2, 1, null, null, null]), json!([3]), "dp[3] = 1 using coin 3."),
          (json!([0, 1, 2, 1, 1, null, null]), json!([4]), "dp[4] = 1 using coin 4."),
          (json!([0, 1, 2, 1, 1, 2, null]), json!([5]), "dp[5] = dp[4] + 1 = 2."),
          (json!([0, 1, 2, 1, 1, 2, 2]), json!([6]), "dp[6] = dp[3] + 1 = 2 (3 + 3)."),
        ],
      ),
      settings: settings(1300),
      ..activity(KIND, 10, 4, "Ultimate Dynamic Programming Challenge: Coin Change",
        "Understand bottom-up dynamic programming by watching each table cell reuse earlier answers.",
        &["python", "algorithm-visualization", "dynamic-programming", "algorithms", "expert"])
    },
  ]
}
