/*!
# Number Guessing

Start with `slots --game guess`. The computer picks a number between 1
and 100 and you try to find it. Each guess is answered with too low or
too high. Use `--max` to pick a different upper bound.

<pre><code>&nbsp;  Welcome to the Number Guessing Game!
&nbsp;  Guess a number between 1 and 100
&nbsp;> Enter your guess: 50
&nbsp;  TOO HIGH! Try again.
&nbsp;> Enter your guess: 25
&nbsp;  TOO LOW! Try again.
&nbsp;> Enter your guess: 37
&nbsp;  CORRECT! The number was 37
&nbsp;  Total attempts: 3
</code></pre>

Something that isn't a whole number doesn't count as an attempt.
CTRL-D gives up and shows the number.
*/
